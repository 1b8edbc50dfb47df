//! Neon ASCII banner with gradient (VIVI).

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

const TITLE: &str = "VIVI";
const TAGLINE: &str = "Professora Auxiliar de IA · MBA Gerenciamento de Projetos";

/// Neon Purple (#bc13fe).
const NEON_PURPLE: (u8, u8, u8) = (0xbc, 0x13, 0xfe);
/// Cyber Green (#0ff0fc).
const CYBER_GREEN: (u8, u8, u8) = (0x0f, 0xf0, 0xfc);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let mix = |x: u8, y: u8| (f64::from(x) * (1.0 - t) + f64::from(y) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}

/// Renders the title with the bundled figlet font; plain text if the font fails to load.
fn banner_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()))
        .unwrap_or_else(|| format!("{}\n", TITLE))
}

/// Pairs every non-blank line of `art` with its gradient color, top purple, bottom green.
fn gradient_lines(art: &str) -> Vec<(Color, &str)> {
    let lines: Vec<&str> = art.lines().filter(|l| !l.trim().is_empty()).collect();
    let last = lines.len().saturating_sub(1).max(1) as f64;
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| (rgb(lerp_rgb(NEON_PURPLE, CYBER_GREEN, i as f64 / last)), line))
        .collect()
}

/// Prints the welcome banner, then version and tagline.
pub fn print_welcome() {
    let mut out = stdout();
    let art = banner_art();
    for (color, line) in gradient_lines(&art) {
        let _ = out.execute(SetForegroundColor(color));
        let _ = out.execute(Print(format!("{}\r\n", line)));
    }
    let _ = out.execute(SetForegroundColor(rgb(CYBER_GREEN)));
    let _ = out.execute(Print(format!(
        "v{}  {}\r\n\r\n",
        env!("CARGO_PKG_VERSION"),
        TAGLINE
    )));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb(NEON_PURPLE, CYBER_GREEN, 0.0), NEON_PURPLE);
        assert_eq!(lerp_rgb(NEON_PURPLE, CYBER_GREEN, 1.0), CYBER_GREEN);
    }

    #[test]
    fn test_gradient_spans_both_colors() {
        let lines = gradient_lines("a\n\nb\nc\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], (rgb(NEON_PURPLE), "a"));
        assert_eq!(lines[2], (rgb(CYBER_GREEN), "c"));
    }

    #[test]
    fn test_single_line_art() {
        assert_eq!(gradient_lines("VIVI"), vec![(rgb(NEON_PURPLE), "VIVI")]);
    }

    #[test]
    fn test_banner_art_not_empty() {
        assert!(!banner_art().trim().is_empty());
    }
}
