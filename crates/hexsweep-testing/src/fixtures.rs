//! Sample file contents shared by integration tests.

/// Stylesheet with `#1a73e8` three times and `#FFF` once.
pub const THEME_CSS: &str = "\
:root {
  --primary: #1A73E8;
  --background: #FFF;
}

.button {
  color: #1a73e8;
  border: 1px solid #1a73e8;
}
";

/// Component with one inline color and no trailing newline.
pub const BUTTON_TSX: &str = "export const Button = () => <button style={{ color: '#ff000080' }} />;";

/// Plain JSON manifest without any colors.
pub const PACKAGE_JSON: &str = "{\n  \"name\": \"sample-app\",\n  \"version\": \"1.0.0\"\n}\n";

/// Latin-1 encoded text: `color: #abc; /* café */` with a raw 0xE9 byte.
pub const LATIN1_CSS: &[u8] = b"color: #abc; /* caf\xe9 */\n";
