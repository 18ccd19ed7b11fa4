use ratatui::style::Color;

// Matrix Palette
pub const MATRIX_GREEN: Color = Color::Rgb(0, 255, 65);    // Classic Matrix Neon
pub const DARK_GREEN: Color = Color::Rgb(0, 100, 0);       // Deep Terminal Green
pub const BRIGHT_GREEN: Color = Color::Rgb(150, 255, 150); // Lighter Neon highlight
pub const SOFT_GREEN: Color = Color::Rgb(0, 180, 90);      // Muted mid green
pub const HIGHLIGHT_BG: Color = Color::Rgb(0, 55, 20);     // Selected row backdrop

// Text tones
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 255, 220);   // Near-white with a green cast
pub const TEXT_SECONDARY: Color = Color::Rgb(140, 180, 140); // Readable but recessed
pub const TEXT_DIM: Color = Color::Rgb(90, 115, 90);         // Hints and placeholders
