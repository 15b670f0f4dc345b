use thiserror::Error;
use tracing::{event, warn, Level};

#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum DispatchError {
    #[error("Unable to accept the update")]
    UnableToAcceptUpdate,

    #[error("Observer failed: {0}")]
    Failed(String),
}

/// Something that wants every new output of a [`Dispatcher`], usually a
/// chart or a block of text on the page.
pub trait Observer<O> {
    fn notify(&mut self, output: &O) -> Result<(), DispatchError>;
}

impl<O, F> Observer<O> for F
where
    F: FnMut(&O) -> Result<(), DispatchError>,
{
    fn notify(&mut self, output: &O) -> Result<(), DispatchError> {
        self(output)
    }
}

/// Holds one page's input and the pure function from input to output.
///
/// The output is only recomputed when a new input differs from the current
/// one. An observer that returns an error is dropped and never notified
/// again; the other observers are unaffected.
///
/// # Example
///
/// ```
/// use poker_primer::equity::{estimate_equity, CardsToCome, EstimateMethod};
/// use poker_primer::lesson::Dispatcher;
///
/// let mut page = Dispatcher::new(8_u8, |outs: &u8| {
///     estimate_equity(*outs, CardsToCome::Two, EstimateMethod::Exact).probability_percent
/// });
/// assert!(page.set_input(9));
/// assert!(!page.set_input(9));
/// assert!(*page.output() > 34.0);
/// ```
pub struct Dispatcher<I, O> {
    input: I,
    output: O,
    compute: Box<dyn Fn(&I) -> O>,
    observers: Vec<Box<dyn Observer<O>>>,
}

impl<I: PartialEq, O> Dispatcher<I, O> {
    /// Compute the initial output from `input`.
    pub fn new<F>(input: I, compute: F) -> Self
    where
        F: Fn(&I) -> O + 'static,
    {
        let output = compute(&input);
        Self {
            input,
            output,
            compute: Box::new(compute),
            observers: Vec::new(),
        }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer<O>>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Replace the input. Returns `true` when it differed from the current
    /// one, in which case the output was recomputed and observers notified.
    pub fn set_input(&mut self, input: I) -> bool {
        if input == self.input {
            event!(Level::TRACE, "Input unchanged, skipping recompute");
            return false;
        }
        self.input = input;
        self.refresh();
        true
    }

    /// Recompute from the current input and notify every observer.
    pub fn refresh(&mut self) {
        self.output = (self.compute)(&self.input);
        let output = &self.output;
        self.observers.retain_mut(|observer| match observer.notify(output) {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "Dropping observer that failed to accept an update");
                false
            }
        });
    }
}

impl<I: std::fmt::Debug, O: std::fmt::Debug> std::fmt::Debug for Dispatcher<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("input", &self.input)
            .field("output", &self.output)
            .field("observers", &self.observers.len())
            .finish()
    }
}
