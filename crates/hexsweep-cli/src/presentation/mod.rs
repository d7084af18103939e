pub mod colors;
pub mod dump;

use is_terminal::IsTerminal;

/// Colors only for an interactive stdout, and never when NO_COLOR is set.
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}
