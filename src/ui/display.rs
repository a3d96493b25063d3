//! Text formatting shared by the line shell and the terminal UI

use crate::protein::Properties;

/// Residues per block when a sequence is shown in groups
pub const BLOCK_SIZE: usize = 10;

/// Format sequence with a space every `size` characters
pub fn format_blocks(sequence: &str, size: usize) -> String {
    let mut result = String::with_capacity(sequence.len() + sequence.len() / size.max(1));
    let total = sequence.chars().count();

    for (i, c) in sequence.chars().enumerate() {
        result.push(c);
        let count = i + 1;
        if size > 0 && count % size == 0 && count < total {
            result.push(' ');
        }
    }

    result
}

/// Render the full property report, one value per line
pub fn format_report(properties: &Properties) -> String {
    let mut out = format!(
        "Number of Amino Acids: {}\n\
         Molecular Weight: {:.1}\n\
         molar Extinction coefficient: {:.2}\n\
         mass Extinction coefficient: {:.2}\n\
         Theoretical pI: {:.2}\n\
         Amino acid composition:\n",
        properties.amino_acid_count,
        properties.molecular_weight,
        properties.molar_extinction,
        properties.mass_extinction,
        properties.isoelectric_point,
    );

    for (residue, percentage) in &properties.composition {
        out.push_str(&format!("\t{residue} = {percentage:.2}%\n"));
    }

    out
}
