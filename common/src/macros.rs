//! Status-line macros for direct user-facing output.
//!
//! These print a colored symbol prefix and are meant for command results,
//! not diagnostics. Diagnostics go through `tracing`.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        use ::colored::Colorize as _;
        println!("{} {}", "[*]".blue(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {{
        use ::colored::Colorize as _;
        println!("{} {}", "[+]".green().bold(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        use ::colored::Colorize as _;
        println!("{} {}", "[!]".yellow().bold(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {{
        use ::colored::Colorize as _;
        println!("{} {}", "[-]".red().bold(), format!($($arg)*));
    }};
}
