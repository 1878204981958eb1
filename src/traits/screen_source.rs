/// Host query for screen geometry
pub trait ScreenSource {
    /// Screen size in logical (device independent) pixels
    fn logical_size(&self) -> (f64, f64);

    /// Device pixel scale factor, `None` if the host does not report one
    fn scale_factor(&self) -> Option<f64>;
}

/// Host query for the strings used to name the browser and operating system
pub trait HostIdentity {
    fn user_agent(&self) -> &str;

    fn platform(&self) -> &str;
}
