use crate::sequence::Sequence;
use flate2::read::GzDecoder;
use memmap2::Mmap;
use needle_core::error::{NeedleError, NeedleResult};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_while1},
    character::complete::{line_ending, not_line_ending},
    combinator::{eof, map, opt},
    sequence::preceded,
    IResult,
};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Residues per line when writing FASTA files
pub const FASTA_LINE_WIDTH: usize = 80;

/// Parse a FASTA header line
fn parse_header(input: &[u8]) -> IResult<&[u8], (&str, Option<&str>)> {
    let (input, _) = tag(b">")(input)?;
    let (input, id) = map(
        take_till(|c: u8| c == b' ' || c == b'\t' || c == b'\n' || c == b'\r'),
        |s| std::str::from_utf8(s).unwrap_or(""),
    )(input)?;
    let (input, description) = opt(preceded(
        take_while1(|c: u8| c == b' ' || c == b'\t'),
        map(not_line_ending, |s| std::str::from_utf8(s).unwrap_or("")),
    ))(input)?;
    let (input, _) = alt((line_ending, eof))(input)?;
    Ok((input, (id, description.filter(|d| !d.trim().is_empty()))))
}

/// Parse sequence lines until next header or EOF
fn parse_sequence(input: &[u8]) -> IResult<&[u8], Vec<u8>> {
    let mut sequence = Vec::new();
    let mut remaining = input;

    while !remaining.is_empty() && remaining[0] != b'>' {
        let (rest, line) =
            take_till::<_, _, nom::error::Error<_>>(|c: u8| c == b'\n' || c == b'\r')(remaining)?;
        let (rest, _) = opt(line_ending)(rest)?;
        // A bare '\r' is not a line ending for nom
        let rest = rest.strip_prefix(b"\r").unwrap_or(rest);

        for &c in line {
            if !c.is_ascii_whitespace() {
                sequence.push(c.to_ascii_uppercase());
            }
        }

        remaining = rest;
    }

    Ok((remaining, sequence))
}

/// Parse a single FASTA record
fn parse_record(input: &[u8]) -> IResult<&[u8], Sequence> {
    let (input, (id, description)) = parse_header(input)?;
    let (input, sequence) = parse_sequence(input)?;

    let mut seq = Sequence::new(id.to_string(), sequence);
    if let Some(desc) = description {
        seq = seq.with_description(desc.to_string());
    }

    Ok((input, seq))
}

/// Parse FASTA from bytes
pub fn parse_fasta_from_bytes(data: &[u8]) -> NeedleResult<Vec<Sequence>> {
    let mut input = data;
    let mut sequences = Vec::new();

    loop {
        // Skip empty lines and whitespace
        while let Some((first, rest)) = input.split_first() {
            if !first.is_ascii_whitespace() {
                break;
            }
            input = rest;
        }

        if input.is_empty() {
            break;
        }

        if input[0] != b'>' {
            let offset = data.len() - input.len();
            return Err(NeedleError::Parse(format!(
                "Expected '>' at byte {}, found '{}'",
                offset, input[0] as char
            )));
        }

        match parse_record(input) {
            Ok((remaining, seq)) => {
                sequences.push(seq);
                input = remaining;
            }
            Err(e) => {
                return Err(NeedleError::Parse(format!("Failed to parse FASTA: {:?}", e)));
            }
        }
    }

    Ok(sequences)
}

/// Parse a FASTA file into sequences (supports .gz compression)
pub fn parse_fasta<P: AsRef<Path>>(path: P) -> NeedleResult<Vec<Sequence>> {
    let path = path.as_ref();

    if is_gzipped(path) {
        parse_fasta_gzip(path)
    } else {
        parse_fasta_uncompressed(path)
    }
}

/// First record of a FASTA file as a `(sequence, header)` pair
///
/// The header is returned without the leading '>'.
pub fn read_fasta<P: AsRef<Path>>(path: P) -> NeedleResult<(Vec<u8>, String)> {
    let path = path.as_ref();
    let mut sequences = parse_fasta(path)?;

    if sequences.is_empty() {
        return Err(NeedleError::Parse(format!(
            "No FASTA records in {}",
            path.display()
        )));
    }
    if sequences.len() > 1 {
        tracing::debug!(
            path = %path.display(),
            records = sequences.len(),
            "using the first FASTA record"
        );
    }

    let first = sequences.swap_remove(0);
    let header = first.header();
    Ok((first.sequence, header))
}

fn is_gzipped(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

fn parse_fasta_uncompressed(path: &Path) -> NeedleResult<Vec<Sequence>> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(Vec::new());
    }
    let mmap = unsafe { Mmap::map(&file)? };

    parse_fasta_from_bytes(&mmap[..])
}

fn parse_fasta_gzip(path: &Path) -> NeedleResult<Vec<Sequence>> {
    let file = File::open(path)?;
    let mut decoder = GzDecoder::new(BufReader::new(file));
    let mut buffer = Vec::new();
    decoder.read_to_end(&mut buffer)?;

    parse_fasta_from_bytes(&buffer)
}

/// Write sequences to a FASTA file (supports .gz compression)
pub fn write_fasta<P: AsRef<Path>>(path: P, sequences: &[Sequence]) -> NeedleResult<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let path = path.as_ref();
    let file = File::create(path)?;

    if is_gzipped(path) {
        let encoder = GzEncoder::new(file, Compression::default());
        let mut writer = BufWriter::new(encoder);
        write_fasta_to_writer(&mut writer, sequences, FASTA_LINE_WIDTH)?;
        writer.flush()?;
    } else {
        let mut writer = BufWriter::new(file);
        write_fasta_to_writer(&mut writer, sequences, FASTA_LINE_WIDTH)?;
        writer.flush()?;
    }

    Ok(())
}

/// Write sequences to any writer, wrapping residues at `line_width` (0 = no wrap)
pub fn write_fasta_to_writer<W: Write>(
    writer: &mut W,
    sequences: &[Sequence],
    line_width: usize,
) -> NeedleResult<()> {
    for seq in sequences {
        writeln!(writer, ">{}", seq.header())?;

        if line_width == 0 {
            writeln!(writer, "{}", seq.as_str())?;
            continue;
        }
        for chunk in seq.sequence.chunks(line_width) {
            writeln!(writer, "{}", String::from_utf8_lossy(chunk))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let input = b">sp|P12345|PROTEIN_HUMAN Description here\nACGT";
        let (remaining, (id, desc)) = parse_header(input).unwrap();
        assert_eq!(id, "sp|P12345|PROTEIN_HUMAN");
        assert_eq!(desc, Some("Description here"));
        assert_eq!(remaining, b"ACGT");
    }

    #[test]
    fn test_parse_header_without_newline() {
        let (remaining, (id, desc)) = parse_header(b">lonely").unwrap();
        assert_eq!(id, "lonely");
        assert_eq!(desc, None);
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_parse_multiline_record() {
        let sequences = parse_fasta_from_bytes(b">seq1 test\nmqk\nl\n\n>seq2\nMGG\r\nQKL\r\n").unwrap();
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].sequence, b"MQKL");
        assert_eq!(sequences[0].description.as_deref(), Some("test"));
        assert_eq!(sequences[1].sequence, b"MGGQKL");
    }

    #[test]
    fn test_empty_record_is_kept() {
        let sequences = parse_fasta_from_bytes(b">empty\n>full\nAC\n").unwrap();
        assert_eq!(sequences.len(), 2);
        assert!(sequences[0].is_empty());
        assert_eq!(sequences[1].sequence, b"AC");
    }

    #[test]
    fn test_missing_header_is_parse_error() {
        let result = parse_fasta_from_bytes(b"\nACGT\n");
        match result {
            Err(NeedleError::Parse(msg)) => assert!(msg.contains("Expected '>'")),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_without_wrapping() {
        let mut out = Vec::new();
        let seq = Sequence::new("s".to_string(), b"ACGTACGT".to_vec());
        write_fasta_to_writer(&mut out, &[seq.clone()], 0).unwrap();
        assert_eq!(out, b">s\nACGTACGT\n");

        let mut out = Vec::new();
        write_fasta_to_writer(&mut out, &[seq], 3).unwrap();
        assert_eq!(out, b">s\nACG\nTAC\nGT\n");
    }
}
