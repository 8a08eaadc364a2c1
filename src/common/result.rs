use crate::common::error::FleetError;

/// Result alias used throughout the crate
///
/// # Examples
///
/// ```
/// use svnfleet::common::result::FleetResult;
/// use svnfleet::common::error::FleetError;
///
/// fn example_function() -> FleetResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> FleetResult<()> {
///     Err(FleetError::internal_error("Something went wrong"))
/// }
/// ```
pub type FleetResult<T> = Result<T, FleetError>;

/// Conversions from `Option` into [`FleetResult`]
pub trait OptionExt<T> {
    /// Converts `None` into the given error
    ///
    /// # Examples
    ///
    /// ```
    /// use svnfleet::common::result::{FleetResult, OptionExt};
    /// use svnfleet::common::error::FleetError;
    ///
    /// let none_value: Option<String> = None;
    /// let result: FleetResult<String> = none_value.ok_or_fleet(
    ///     FleetError::internal_error("Value not found")
    /// );
    /// assert!(result.is_err());
    /// ```
    fn ok_or_fleet(self, error: FleetError) -> FleetResult<T>;

    /// Converts `None` into a repository error
    fn ok_or_repository_error(
        self,
        message: impl Into<String>,
        repository: &str,
    ) -> FleetResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_fleet(self, error: FleetError) -> FleetResult<T> {
        self.ok_or(error)
    }

    fn ok_or_repository_error(
        self,
        message: impl Into<String>,
        repository: &str,
    ) -> FleetResult<T> {
        self.ok_or_else(|| FleetError::repository_error(message, Some(repository.to_string())))
    }
}

/// Conversions from foreign `Result`s into [`FleetResult`]
pub trait ResultExt<T, E> {
    /// Maps the error with a closure
    fn map_fleet_err<F>(self, f: F) -> FleetResult<T>
    where
        F: FnOnce(E) -> FleetError;

    /// Wraps an I/O failure together with the path it concerned
    ///
    /// # Examples
    ///
    /// ```
    /// use svnfleet::common::result::{FleetResult, ResultExt};
    ///
    /// let result: Result<String, std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::NotFound, "file not found"
    /// ));
    /// let fleet_result: FleetResult<String> = result.with_filesystem_error("Failed to read", None);
    /// assert!(fleet_result.is_err());
    /// ```
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> FleetResult<T>
    where
        E: Into<std::io::Error>;

    /// Attributes the failure to one repository of the fleet, appending the
    /// underlying error to `message`
    fn with_repository(self, message: impl Into<String>, repository: &str) -> FleetResult<T>
    where
        E: std::error::Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn map_fleet_err<F>(self, f: F) -> FleetResult<T>
    where
        F: FnOnce(E) -> FleetError,
    {
        self.map_err(f)
    }

    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> FleetResult<T>
    where
        E: Into<std::io::Error>,
    {
        self.map_err(|e| FleetError::filesystem_error_with_source(message, path, e.into()))
    }

    fn with_repository(self, message: impl Into<String>, repository: &str) -> FleetResult<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.map_err(|e| {
            let message = format!("{}: {}", message.into(), e);
            FleetError::repository_error_with_source(message, Some(repository.to_string()), e)
        })
    }
}
