//! Substitution matrices for sequence alignment

use needle_core::error::{NeedleError, NeedleResult};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

const BLOSUM62_TABLE: &str = include_str!("../../../data/BLOSUM62.mat");
const NUCLEOTIDES: &[u8] = b"ACGTUN";

/// Lookup seam used by the aligner.
///
/// Symbols are resolved to dense indices once per sequence, so the DP fill
/// only ever calls `score_by_index`.
pub trait ScoringMatrix {
    fn alphabet(&self) -> &[u8];

    fn index_of(&self, symbol: u8) -> Option<usize>;

    fn score_by_index(&self, i: usize, j: usize) -> f64;

    fn score(&self, a: u8, b: u8) -> NeedleResult<f64> {
        let i = self
            .index_of(a)
            .ok_or_else(|| NeedleError::unknown_lookup(a))?;
        let j = self
            .index_of(b)
            .ok_or_else(|| NeedleError::unknown_lookup(b))?;
        Ok(self.score_by_index(i, j))
    }
}

/// Square substitution table loaded from an NCBI/EMBOSS style text file
#[derive(Clone)]
pub struct SubstitutionMatrix {
    name: String,
    alphabet: Vec<u8>,
    index: [Option<usize>; 256],
    scores: Vec<f64>,
}

impl SubstitutionMatrix {
    /// Load a table from disk
    pub fn load<P: AsRef<Path>>(path: P) -> NeedleResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("matrix")
            .to_string();
        Self::from_reader(BufReader::new(file), name)
    }

    /// Parse a table from any buffered reader
    ///
    /// The first non-comment line lists the alphabet; every following line is a
    /// row label followed by one score per alphabet symbol, rows in header order.
    pub fn from_reader<R: BufRead>(reader: R, name: impl Into<String>) -> NeedleResult<Self> {
        let name = name.into();
        let mut alphabet: Option<Vec<u8>> = None;
        let mut scores = Vec::new();
        let mut rows = 0usize;
        let mut last_line = 0usize;

        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = line_idx + 1;
            last_line = line_no;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let tokens: Vec<&str> = trimmed.split_whitespace().collect();

            let header = match &alphabet {
                None => {
                    alphabet = Some(parse_header_row(&tokens, line_no)?);
                    continue;
                }
                Some(header) => header,
            };

            if rows >= header.len() {
                return Err(NeedleError::format(
                    line_no,
                    format!(
                        "table is not square: more than {} rows for {} header symbols",
                        header.len(),
                        header.len()
                    ),
                ));
            }

            let label = parse_symbol(tokens[0], line_no)?;
            if label != header[rows] {
                return Err(NeedleError::format(
                    line_no,
                    format!(
                        "row label '{}' does not match header symbol '{}'",
                        label as char, header[rows] as char
                    ),
                ));
            }

            let cells = &tokens[1..];
            if cells.len() != header.len() {
                return Err(NeedleError::format(
                    line_no,
                    format!(
                        "row '{}' has {} scores, expected {}",
                        label as char,
                        cells.len(),
                        header.len()
                    ),
                ));
            }

            for cell in cells {
                let value = cell
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| {
                        NeedleError::format(line_no, format!("invalid score '{}'", cell))
                    })?;
                scores.push(value);
            }
            rows += 1;
        }

        let alphabet = alphabet
            .ok_or_else(|| NeedleError::format(last_line, "no header row found"))?;

        if rows != alphabet.len() {
            return Err(NeedleError::format(
                last_line,
                format!(
                    "table is not square: {} header symbols but {} rows",
                    alphabet.len(),
                    rows
                ),
            ));
        }

        let matrix = Self::from_parts(name, alphabet, scores);

        if !matrix.is_symmetric() {
            tracing::warn!(matrix = %matrix.name, "substitution matrix is not symmetric");
        }
        tracing::info!(
            matrix = %matrix.name,
            symbols = matrix.len(),
            "loaded substitution matrix"
        );

        Ok(matrix)
    }

    fn from_parts(name: String, alphabet: Vec<u8>, scores: Vec<f64>) -> Self {
        let mut index = [None; 256];
        for (i, &symbol) in alphabet.iter().enumerate() {
            index[symbol as usize] = Some(i);
            index[symbol.to_ascii_lowercase() as usize] = Some(i);
        }

        Self {
            name,
            alphabet,
            index,
            scores,
        }
    }

    /// BLOSUM62 protein matrix
    pub fn blosum62() -> Self {
        Self::from_reader(BLOSUM62_TABLE.as_bytes(), "BLOSUM62")
            .expect("bundled BLOSUM62 table is well formed")
    }

    /// Nucleotide matrix over `ACGTUN`
    ///
    /// T and U are the same base. Purine-purine and pyrimidine-pyrimidine
    /// pairs score `transition`, other pairs score `transversion`. N scores
    /// `transversion` against everything, itself included.
    pub fn nucleotide(match_score: f64, transition: f64, transversion: f64) -> Self {
        fn base(symbol: u8) -> u8 {
            if symbol == b'U' {
                b'T'
            } else {
                symbol
            }
        }
        fn is_purine(symbol: u8) -> bool {
            matches!(symbol, b'A' | b'G')
        }
        fn is_pyrimidine(symbol: u8) -> bool {
            matches!(symbol, b'C' | b'T')
        }

        let mut scores = Vec::with_capacity(NUCLEOTIDES.len() * NUCLEOTIDES.len());
        for &a in NUCLEOTIDES {
            for &b in NUCLEOTIDES {
                let (a, b) = (base(a), base(b));
                let score = if a == b'N' || b == b'N' {
                    transversion
                } else if a == b {
                    match_score
                } else if (is_purine(a) && is_purine(b)) || (is_pyrimidine(a) && is_pyrimidine(b))
                {
                    transition
                } else {
                    transversion
                };
                scores.push(score);
            }
        }

        Self::from_parts("NUC".to_string(), NUCLEOTIDES.to_vec(), scores)
    }

    /// Nucleotide matrix with the default +10 / -5 / -5 scores
    pub fn nucleotide_default() -> Self {
        Self::nucleotide(10.0, -5.0, -5.0)
    }

    /// Builtin matrix by name ("BLOSUM62" or "NUC", case-insensitive)
    pub fn builtin(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "BLOSUM62" => Some(Self::blosum62()),
            "NUC" | "DNA" => Some(Self::nucleotide_default()),
            _ => None,
        }
    }

    /// Builtin matrix name, otherwise a path to a table file
    pub fn resolve(name_or_path: &str) -> NeedleResult<Self> {
        match Self::builtin(name_or_path) {
            Some(matrix) => Ok(matrix),
            None => Self::load(name_or_path),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of symbols in the alphabet
    pub fn len(&self) -> usize {
        self.alphabet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alphabet.is_empty()
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| (i + 1..n).all(|j| self.scores[i * n + j] == self.scores[j * n + i]))
    }
}

impl ScoringMatrix for SubstitutionMatrix {
    fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    fn index_of(&self, symbol: u8) -> Option<usize> {
        self.index[symbol as usize]
    }

    #[inline]
    fn score_by_index(&self, i: usize, j: usize) -> f64 {
        self.scores[i * self.alphabet.len() + j]
    }
}

impl FromStr for SubstitutionMatrix {
    type Err = NeedleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes(), "inline")
    }
}

impl fmt::Debug for SubstitutionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubstitutionMatrix")
            .field("name", &self.name)
            .field("alphabet", &String::from_utf8_lossy(&self.alphabet))
            .finish()
    }
}

/// Renders the table back in the layout `from_reader` accepts
impl fmt::Display for SubstitutionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for &symbol in &self.alphabet {
            write!(f, " {:>3}", symbol as char)?;
        }
        writeln!(f)?;

        for (i, &symbol) in self.alphabet.iter().enumerate() {
            write!(f, "{}", symbol as char)?;
            for j in 0..self.len() {
                write!(f, " {:>3}", self.score_by_index(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn parse_symbol(token: &str, line_no: usize) -> NeedleResult<u8> {
    match token.as_bytes() {
        [symbol] if symbol.is_ascii_graphic() => Ok(symbol.to_ascii_uppercase()),
        _ => Err(NeedleError::format(
            line_no,
            format!("'{}' is not a single-character symbol", token),
        )),
    }
}

fn parse_header_row(tokens: &[&str], line_no: usize) -> NeedleResult<Vec<u8>> {
    let mut alphabet = Vec::with_capacity(tokens.len());
    for token in tokens {
        let symbol = parse_symbol(token, line_no)?;
        if alphabet.contains(&symbol) {
            return Err(NeedleError::format(
                line_no,
                format!("duplicate symbol '{}' in header", symbol as char),
            ));
        }
        alphabet.push(symbol);
    }
    Ok(alphabet)
}
