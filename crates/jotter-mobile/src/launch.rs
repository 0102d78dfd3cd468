//! Launch argument parsing for deep-link starts.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use jotter_core::util::normalize_text_option;

const DEEP_LINK_FLAG: &str = "--deep-link";
#[cfg(target_os = "android")]
const DEEP_LINK_ENV: &str = "JOTTER_DEEP_LINK";

/// Parsed launch state for the mobile app.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchIntent {
    /// URL the app was opened with, if any.
    pub deep_link: Option<String>,
}

/// Detect launch settings from process arguments and environment.
#[cfg(target_os = "android")]
pub fn detect_launch_intent_from_runtime() -> LaunchIntent {
    let args: Vec<String> = std::env::args().collect();
    let env_deep_link = std::env::var(DEEP_LINK_ENV).ok();
    parse_launch_intent(
        args.iter().map(String::as_str),
        env_deep_link.as_deref(),
    )
}

/// Parse launch state from explicit args/env inputs.
pub fn parse_launch_intent<'a>(
    args: impl IntoIterator<Item = &'a str>,
    env_deep_link: Option<&str>,
) -> LaunchIntent {
    let mut from_args = None;

    let mut iter = args.into_iter().peekable();
    // Skip executable path.
    _ = iter.next();

    while let Some(arg) = iter.next() {
        if let Some(value) = arg.strip_prefix("--deep-link=") {
            from_args = normalize_text_option(Some(value.to_string()));
            continue;
        }

        if arg == DEEP_LINK_FLAG {
            let next = iter.peek().copied().unwrap_or_default();
            if !next.is_empty() && !next.starts_with("--") {
                _ = iter.next();
                from_args = normalize_text_option(Some(next.to_string()));
            }
        }
    }

    LaunchIntent {
        deep_link: from_args
            .or_else(|| normalize_text_option(env_deep_link.map(str::to_string))),
    }
}
