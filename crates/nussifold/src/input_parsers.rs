use std::fs::File;
use std::io::{stdin, BufRead, BufReader, Cursor};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use paste::paste;
use nf_fold::NucleotideVec;

/// One sequence of a FASTA-like input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub header: Option<String>,
    pub sequence: NucleotideVec,
}

impl SequenceRecord {
    /// First word of the header without the leading '>', or "anonymous".
    pub fn name(&self) -> String {
        self.header
            .as_deref()
            .and_then(|h| h.strip_prefix('>'))
            .and_then(|s| s.split_whitespace().next())
            .unwrap_or("anonymous")
            .to_string()
    }
}

// ============================================================
//  Generic FASTA-like parser supporting lenient/strict modes
// ============================================================

#[derive(Clone, Copy)]
enum SequenceMode {
    Lenient,
    Strict,
}

fn finish_record(
    header: Option<String>,
    raw: String,
    mode: SequenceMode,
) -> Result<SequenceRecord> {
    if raw.is_empty() {
        return Err(anyhow!(
            "Missing sequence line for record {}",
            header.as_deref().unwrap_or(">anonymous")
        ));
    }
    let sequence = match mode {
        SequenceMode::Lenient => NucleotideVec::from_lossy(&raw),
        SequenceMode::Strict => NucleotideVec::try_from(raw.as_str()).with_context(|| {
            format!("Invalid record {}", header.as_deref().unwrap_or(">anonymous"))
        })?,
    };
    Ok(SequenceRecord { header, sequence })
}

/// Core parsing logic shared by all adapters.
///
/// A '>' line opens a new record, all following sequence lines up to the
/// next header are concatenated. Blank lines are ignored and whitespace
/// inside a sequence line is skipped.
fn parse_records<R: BufRead>(reader: R, mode: SequenceMode) -> Result<Vec<SequenceRecord>> {
    let mut records = Vec::new();
    let mut header: Option<String> = None;
    let mut raw = String::new();
    let mut open = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('>') {
            if open {
                records.push(finish_record(header.take(), std::mem::take(&mut raw), mode)?);
            }
            header = Some(line.to_string());
            open = true;
        } else {
            raw.extend(line.split_whitespace());
            open = true;
        }
    }

    if open {
        records.push(finish_record(header, raw, mode)?);
    }
    if records.is_empty() {
        return Err(anyhow!("Missing sequence line"));
    }
    Ok(records)
}

// ============================================================
//  Base parser functions (strict and lenient variants)
// ============================================================

/// Rejects any symbol outside of ACGU (T reads as U).
pub fn read_sequences<R: BufRead>(reader: R) -> Result<Vec<SequenceRecord>> {
    parse_records(reader, SequenceMode::Strict)
}

/// Replaces unsupported symbols by 'N', which never pairs.
pub fn read_sequences_lossy<R: BufRead>(reader: R) -> Result<Vec<SequenceRecord>> {
    parse_records(reader, SequenceMode::Lenient)
}

// ============================================================
//  Macro generating file/string/stdin/input helpers
// ============================================================

/// Generate input adapters for a base parser function `fn base<R: BufRead>(R) -> Result<T>`.
///
/// This expands into:
/// - `base_string(&str)`
/// - `base_file<P: AsRef<Path>>(P)`
/// - `base_stdin()`
/// - `base_input(&str)`  (dispatches "-" → stdin, otherwise → file)
macro_rules! define_input_variants {
    ($base:ident, $ret:ty) => {
        paste! {
            /// Read from a string buffer.
            pub fn [<$base _string>](s: &str) -> $ret {
                $base(Cursor::new(s))
            }

            /// Read from a file path.
            pub fn [<$base _file>]<P: AsRef<Path>>(path: P) -> $ret {
                let path = path.as_ref();
                let file = File::open(path)
                    .with_context(|| format!("Cannot open {}", path.display()))?;
                $base(BufReader::new(file))
            }

            /// Read from stdin.
            pub fn [<$base _stdin>]() -> $ret {
                let reader = BufReader::new(stdin());
                $base(reader)
            }

            /// Read either from stdin ("-") or a file path.
            pub fn [<$base _input>](s: &str) -> $ret {
                if s == "-" {
                    [<$base _stdin>]()
                } else {
                    [<$base _file>](s)
                }
            }
        }
    };
}

type RecordsResult = Result<Vec<SequenceRecord>>;

define_input_variants!(read_sequences, RecordsResult);
define_input_variants!(read_sequences_lossy, RecordsResult);

// ============================================================
//  Position ruler for verbose output
// ============================================================

pub fn ruler(len: usize) -> String {
    let mut s = String::new();
    let mut c = 0;
    for i in 0..=len {
        if i % 10 == 0 {
            let t = format!("{}", i / 10);
            c = t.len() - 1;
            s.push_str(&t);
            continue;
        } else if c > 0 {
            c -= 1;
            continue;
        }
        if i % 10 == 5 {
            s.push(',');
        } else {
            s.push('.');
        }
    }
    s
}
