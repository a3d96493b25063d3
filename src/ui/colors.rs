//! Color definitions for residues and UI elements

use ratatui::style::Color;

use crate::protein::Residue;

/// Get the display color for a residue, grouped by side-chain chemistry
pub fn get_residue_color(residue: Residue) -> Color {
    match residue {
        Residue::Asp | Residue::Glu => Color::Red,
        Residue::Lys | Residue::Arg => Color::Blue,
        Residue::His => Color::LightBlue,
        Residue::Phe | Residue::Trp | Residue::Tyr => Color::Yellow,
        Residue::Cys | Residue::Met => Color::LightYellow,
        Residue::Ser | Residue::Thr | Residue::Asn | Residue::Gln => Color::Green,
        Residue::Gly | Residue::Pro => Color::Magenta,
        Residue::Ala | Residue::Val | Residue::Leu | Residue::Ile => Color::White,
    }
}

/// Color for a raw symbol; anything outside the alphabet is dimmed
pub fn get_symbol_color(symbol: char) -> Color {
    Residue::from_symbol(symbol)
        .map(get_residue_color)
        .unwrap_or(Color::DarkGray)
}

/// Red for net negative, blue for net positive, white near neutral
pub fn get_charge_color(charge: f64) -> Color {
    if charge > 0.5 {
        Color::Blue
    } else if charge < -0.5 {
        Color::Red
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charged_residues_have_distinct_colors() {
        assert_eq!(get_residue_color(Residue::Asp), Color::Red);
        assert_eq!(get_residue_color(Residue::Lys), Color::Blue);
        assert_ne!(get_residue_color(Residue::Asp), get_residue_color(Residue::Arg));
    }

    #[test]
    fn test_symbol_color() {
        assert_eq!(get_symbol_color('w'), Color::Yellow);
        assert_eq!(get_symbol_color('X'), Color::DarkGray);
    }

    #[test]
    fn test_charge_color() {
        assert_eq!(get_charge_color(3.0), Color::Blue);
        assert_eq!(get_charge_color(-3.0), Color::Red);
        assert_eq!(get_charge_color(0.1), Color::White);
    }
}
