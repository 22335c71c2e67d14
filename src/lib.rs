// lib.rs - core streaming API

use std::io::{self, BufRead, Lines, Write};

/// One sequencing read parsed from a FASTA/FASTQ stream.
///
/// `qual` is `Some` only for a complete FASTQ record; a truncated
/// quality block degrades the record to a FASTA-like one (`None`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastxRecord {
    pub name: String,
    pub seq: String,
    pub qual: Option<String>,
}

/// Streaming FASTA/FASTQ reader over a line-oriented input.
///
/// Handles mixed FASTA/FASTQ input and multi-line sequence/quality
/// blocks with a single-line lookahead, so it works on unbounded
/// streams. Yields each record at most once and never backtracks.
pub struct FastxReader<R: BufRead> {
    lines: Lines<R>,
    // header line seen while scanning the previous record's body
    pending: Option<String>,
    done: bool,
}

impl<R: BufRead> FastxReader<R> {
    pub fn new(reader: R) -> Self {
        FastxReader {
            lines: reader.lines(),
            pending: None,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for FastxReader<R> {
    type Item = io::Result<FastxRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Find the next header line, unless the previous record
        // already stashed one.
        let header = match self.pending.take() {
            Some(line) => line,
            None => loop {
                match self.lines.next() {
                    Some(Ok(line)) => {
                        if line.starts_with('>') || line.starts_with('@') {
                            break line;
                        }
                        // Skip anything before the first header
                    }
                    Some(Err(e)) => return Some(Err(e)),
                    None => {
                        self.done = true;
                        return None;
                    }
                }
            },
        };

        let name = header[1..]
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_string();

        // Sequence lines run until a header, a '+' separator, or EOF.
        let mut seq = String::new();
        let mut stop = None;
        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    if line.starts_with('@') || line.starts_with('+') || line.starts_with('>') {
                        stop = Some(line);
                        break;
                    }
                    seq.push_str(&line);
                }
                Some(Err(e)) => return Some(Err(e)),
                None => break,
            }
        }

        match stop {
            // EOF: last record of the stream, no quality
            None => {
                self.done = true;
                Some(Ok(FastxRecord { name, seq, qual: None }))
            }
            // Next header: FASTA record, keep the header for the next call
            Some(line) if !line.starts_with('+') => {
                self.pending = Some(line);
                Some(Ok(FastxRecord { name, seq, qual: None }))
            }
            // '+' separator: FASTQ, read quality until it covers the sequence
            Some(_) => {
                let mut qual = String::new();
                loop {
                    match self.lines.next() {
                        Some(Ok(line)) => {
                            qual.push_str(&line);
                            if qual.len() >= seq.len() {
                                return Some(Ok(FastxRecord {
                                    name,
                                    seq,
                                    qual: Some(qual),
                                }));
                            }
                        }
                        Some(Err(e)) => return Some(Err(e)),
                        None => {
                            // Truncated quality block: degrade to FASTA
                            // and treat the stream as finished.
                            self.done = true;
                            return Some(Ok(FastxRecord { name, seq, qual: None }));
                        }
                    }
                }
            }
        }
    }
}

/// DNA reverse complement.
///
/// Reverses the sequence and swaps A<->T, C<->G, case preserved.
/// Bytes outside the complement table pass through unchanged.
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .rev()
        .map(|&b| match b {
            b'A' => b'T',
            b'T' => b'A',
            b'G' => b'C',
            b'C' => b'G',
            b'a' => b't',
            b't' => b'a',
            b'g' => b'c',
            b'c' => b'g',
            _ => b,
        })
        .collect()
}

/// Counters reported after a conversion run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    /// Input records seen (each consumes one barcode).
    pub records: u64,
    /// Records skipped for being shorter than one fragment.
    pub skipped: u64,
    /// Sub-read pairs written.
    pub pairs: u64,
}

/// Cut each long read into fragments of `2 * read_len` and write one
/// forward/reverse-complement sub-read pair per fragment as FASTA.
///
/// Sub-read identifiers are `{name}_f{fragment} BX:Z:{barcode}`, where
/// the barcode is a 1-based counter advanced once per input record.
/// Records shorter than one fragment are skipped but still consume a
/// barcode. The final fragment of a read may be shorter than
/// `2 * read_len` and still produces a pair from whatever bases exist.
pub fn convert_long_to_linked<R: BufRead, W: Write>(
    reader: FastxReader<R>,
    read_len: usize,
    out: &mut W,
) -> io::Result<ConvertStats> {
    let frag_len = 2 * read_len;
    let mut bx: u64 = 0;
    let mut stats = ConvertStats::default();

    for record in reader {
        let record = record?;
        bx += 1;
        stats.records += 1;

        let seq = record.seq.trim().as_bytes();
        if seq.len() < frag_len {
            stats.skipped += 1;
            continue;
        }

        for (i, frag) in seq.chunks(frag_len).enumerate() {
            let f = i + 1;
            let r1 = &frag[..frag.len().min(read_len)];
            let r2 = reverse_complement(&frag[frag.len().saturating_sub(read_len)..]);

            writeln!(out, ">{}_f{} BX:Z:{}", record.name, f, bx)?;
            out.write_all(r1)?;
            out.write_all(b"\n")?;
            writeln!(out, ">{}_f{} BX:Z:{}", record.name, f, bx)?;
            out.write_all(&r2)?;
            out.write_all(b"\n")?;
            stats.pairs += 1;
        }
    }

    Ok(stats)
}
