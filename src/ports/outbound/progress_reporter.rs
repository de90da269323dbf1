/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback while a resolution is in flight.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts an indeterminate activity indicator (e.g. a network lookup)
    ///
    /// # Arguments
    /// * `message` - Description of what is running
    fn start_activity(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation, clearing any activity indicator
    fn report_completion(&self, message: &str);
}
