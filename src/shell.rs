//! Line-oriented host: prompt, read a sequence, print its report

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::protein::{ProteinParam, ResiduePolicy};
use crate::ui::format_report;

pub const PROMPT: &str = "protein sequence?";

/// Run the prompt loop until EOF or an empty line
///
/// Returns the number of sequences that produced a report.
pub fn run<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    policy: ResiduePolicy,
) -> io::Result<usize> {
    let mut reported = 0;
    let mut line = String::new();

    loop {
        write!(writer, "{PROMPT}")?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            debug!("End of input");
            break;
        }

        let sequence = line.trim_end_matches(['\r', '\n']);
        if sequence.is_empty() {
            debug!("Empty sequence, leaving prompt loop");
            break;
        }

        match ProteinParam::new(sequence, policy) {
            Ok(protein) => {
                info!("Analysing sequence of length {}", protein.len());
                write!(writer, "{}", format_report(&protein.properties()))?;
                reported += 1;
            }
            Err(e) => {
                warn!("Rejected sequence: {e}");
                writeln!(writer, "Invalid sequence: {e}")?;
            }
        }
    }

    writeln!(writer)?;
    Ok(reported)
}
