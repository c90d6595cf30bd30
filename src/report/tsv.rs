//! Tab-separated HSP tables
//!
//! One HSP per line, 12 columns:
//!
//! ```text
//! qid  qlen  tid  tlen  score  qbegin  qend  sbegin  send  ident  length  frame
//! ```
//!
//! Ranges are 0-based and half-open. For translated queries `qbegin`/`qend`
//! are positions in the frame given by `frame` (0..6) and `qlen` is the
//! nucleotide length; otherwise `frame` is 0. Empty lines and lines starting
//! with `#` are skipped.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rustc_hash::FxHashMap;

use crate::align::{Hsp, Match, ReferenceStore, ReferenceTable};
use crate::error::TableError;
use crate::sequence::Interval;

pub const COLUMNS: usize = 12;

/// All targets hit by one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryHits {
    pub title: String,
    /// Source query length
    pub len: usize,
    pub targets: Vec<Match>,
}

fn field<T: FromStr>(value: &str, line: usize, name: &'static str) -> Result<T, TableError> {
    value.parse().map_err(|_| TableError::Field {
        line,
        field: name,
        value: value.to_string(),
    })
}

/// Read a table, registering targets in `refs`.
///
/// Queries keep the order of their first line and targets the order of their
/// first HSP within the query. A target's length is taken from its first line.
pub fn read_table<R: BufRead>(reader: R, refs: &mut ReferenceTable) -> Result<Vec<QueryHits>, TableError> {
    let mut queries: Vec<(QueryHits, FxHashMap<usize, usize>, Vec<Vec<Hsp>>)> = Vec::new();
    let mut query_index: FxHashMap<String, usize> = FxHashMap::default();

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = n + 1;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() != COLUMNS {
            return Err(TableError::Columns {
                line: lineno,
                expected: COLUMNS,
                found: cols.len(),
            });
        }

        let query_len: usize = field(cols[1], lineno, "qlen")?;
        let target_len: usize = field(cols[3], lineno, "tlen")?;
        let frame: u8 = field(cols[11], lineno, "frame")?;
        if frame > 5 {
            return Err(TableError::Field {
                line: lineno,
                field: "frame",
                value: cols[11].to_string(),
            });
        }
        let hsp = Hsp::new(
            field(cols[4], lineno, "score")?,
            Interval::new(field(cols[5], lineno, "qbegin")?, field(cols[6], lineno, "qend")?),
            Interval::new(field(cols[7], lineno, "sbegin")?, field(cols[8], lineno, "send")?),
        )
        .with_identities(field(cols[9], lineno, "ident")?, field(cols[10], lineno, "length")?)
        .with_frame(frame);

        let target_id = refs.get_or_insert(cols[2], target_len);
        let qi = *query_index.entry(cols[0].to_string()).or_insert_with(|| {
            queries.push((
                QueryHits {
                    title: cols[0].to_string(),
                    len: query_len,
                    targets: Vec::new(),
                },
                FxHashMap::default(),
                Vec::new(),
            ));
            queries.len() - 1
        });

        let (hits, slots, hsps) = &mut queries[qi];
        let slot = *slots.entry(target_id).or_insert_with(|| {
            hits.targets.push(Match::score_only(target_id, 0));
            hsps.push(Vec::new());
            hsps.len() - 1
        });
        hsps[slot].push(hsp);
    }

    Ok(queries
        .into_iter()
        .map(|(mut hits, _, hsps)| {
            for (m, h) in hits.targets.iter_mut().zip(hsps) {
                *m = Match::new(m.target_id, h);
            }
            hits
        })
        .collect())
}

/// Write every HSP of every query, in list order.
pub fn write_table<W: Write, R: ReferenceStore + ?Sized>(
    writer: &mut W,
    queries: &[QueryHits],
    refs: &R,
) -> std::io::Result<()> {
    for q in queries {
        for m in &q.targets {
            for h in &m.hsps {
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    q.title,
                    q.len,
                    refs.title(m.target_id),
                    refs.length(m.target_id),
                    h.score,
                    h.query_range.begin,
                    h.query_range.end,
                    h.subject_range.begin,
                    h.subject_range.end,
                    h.identities,
                    h.length,
                    h.frame
                )?;
            }
        }
    }
    Ok(())
}
