/// Browser name patterns, first match wins
const BROWSERS: &[(&[&str], &str)] = &[
    (&["Firefox"], "Mozilla Firefox"),
    (&["SamsungBrowser"], "Samsung Internet"),
    (&["Opera", "OPR"], "Opera"),
    (&["Trident"], "Internet Explorer"),
    (&["Edge"], "Microsoft Edge (Legacy)"),
    (&["Edg"], "Microsoft Edge"),
    (&["Chrome"], "Google Chrome"),
    (&["Safari"], "Safari"),
];

/// Windows NT versions, checked after the UA is known to be Windows
const WINDOWS_VERSIONS: &[(&str, &str)] = &[
    ("Windows NT 10.0", "Windows 10/11"),
    ("Windows NT 6.3", "Windows 8.1"),
    ("Windows NT 6.2", "Windows 8"),
    ("Windows NT 6.1", "Windows 7"),
];

pub const UNKNOWN_BROWSER: &str = "Unknown";
pub const UNKNOWN_OS: &str = "Unknown OS";

/// Name the browser behind a user-agent string
pub fn detect_browser(user_agent: &str) -> &'static str {
    BROWSERS
        .iter()
        .find(|(patterns, _)| patterns.iter().any(|p| user_agent.contains(p)))
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_BROWSER)
}

/// Name the operating system from a user-agent and platform string
pub fn detect_os(user_agent: &str, platform: &str) -> &'static str {
    if user_agent.contains("Win") || platform.contains("Win") {
        return WINDOWS_VERSIONS
            .iter()
            .find(|(token, _)| user_agent.contains(token))
            .map(|(_, name)| *name)
            .unwrap_or("Windows");
    }

    if user_agent.contains("Mac") || platform.contains("Mac") {
        "macOS"
    } else if user_agent.contains("X11") || platform.contains("Linux") {
        "Linux"
    } else if user_agent.contains("Android") {
        "Android"
    } else if ["iPhone", "iPad", "iPod"]
        .iter()
        .any(|device| user_agent.contains(device))
    {
        "iOS"
    } else {
        UNKNOWN_OS
    }
}
