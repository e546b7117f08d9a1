//! scoop-search --hook - PowerShell integration

/// Replaces `scoop search` with this tool and leaves every other scoop
/// subcommand untouched.
pub const POWERSHELL_HOOK: &str = r#"function scoop {
    if ($args[0] -eq "search") {
        scoop-search.exe @($args | Select-Object -Skip 1)
    } else {
        scoop.ps1 @args
    }
}"#;

pub fn run() {
    println!("{POWERSHELL_HOOK}");
}
