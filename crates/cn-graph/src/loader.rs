//! Edge-list ingestion.
//!
//! Input is plain text, one edge per line: `name1,name2,weight`. There is
//! no header and no escaping. Trailing commas are ignored. A malformed line
//! is logged and skipped; it never aborts the load and never registers a
//! vertex. A weight of zero or below registers both names but stores no
//! edge.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use cn_core::CnResult;

use crate::error::RecordError;
use crate::graph::{EdgeRecord, Graph};
use crate::registry;

/// A line the loader rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based line number.
    pub line: usize,
    pub reason: RecordError,
}

/// Outcome of a bulk load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines consumed.
    pub lines: usize,
    /// Records accepted. Those with a weight of zero or below add no edge.
    pub edges: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Parse one `name1,name2,weight` line.
pub fn parse_record(line: &str) -> Result<EdgeRecord, RecordError> {
    let fields: Vec<&str> = line.trim_end_matches(',').split(',').collect();
    let [source, target, weight] = fields[..] else {
        return Err(RecordError::FieldCount {
            found: fields.len(),
        });
    };

    let source = registry::normalize(source).map_err(|_| RecordError::BlankName { field: 1 })?;
    let target = registry::normalize(target).map_err(|_| RecordError::BlankName { field: 2 })?;

    let raw = weight.trim();
    let weight = raw.parse().map_err(|_| RecordError::BadWeight {
        raw: raw.to_owned(),
    })?;

    Ok(EdgeRecord {
        source: source.to_owned(),
        target: target.to_owned(),
        weight,
    })
}

impl Graph {
    /// Feed raw edge-list lines into the graph.
    pub fn load<I, S>(&mut self, lines: I) -> LoadReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = LoadReport::default();

        for (i, line) in lines.into_iter().enumerate() {
            let line_no = i + 1;
            let line = line.as_ref();
            report.lines += 1;

            let stored = parse_record(line).and_then(|record| {
                self.add_record(&record).map_err(|e| RecordError::Unstorable {
                    detail: e.to_string(),
                })
            });

            match stored {
                Ok(()) => report.edges += 1,
                Err(reason) => {
                    tracing::warn!(line = line_no, text = line, %reason, "skipping malformed record");
                    report.skipped.push(SkippedRecord {
                        line: line_no,
                        reason,
                    });
                }
            }
        }

        report
    }

    /// Build a graph from a buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> CnResult<(Graph, LoadReport)> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        let mut graph = Graph::new();
        let report = graph.load(lines);
        tracing::info!(
            lines = report.lines,
            edges = report.edges,
            skipped = report.skipped.len(),
            vertices = graph.vertex_count(),
            "loaded edge list"
        );
        Ok((graph, report))
    }

    /// Build a graph from an edge-list file.
    pub fn from_path(path: impl AsRef<Path>) -> CnResult<(Graph, LoadReport)> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening edge list");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_fields() {
        let r = parse_record(" Jon , Ygritte , 3 ").unwrap();
        assert_eq!(r.source, "Jon");
        assert_eq!(r.target, "Ygritte");
        assert_eq!(r.weight, 3);
    }

    #[test]
    fn parse_rejects_wrong_field_count() {
        assert_eq!(
            parse_record("Jon,Ygritte"),
            Err(RecordError::FieldCount { found: 2 })
        );
        assert_eq!(
            parse_record("Jon,Ygritte,3,4"),
            Err(RecordError::FieldCount { found: 4 })
        );
        assert_eq!(parse_record(""), Err(RecordError::FieldCount { found: 1 }));
    }

    #[test]
    fn parse_rejects_blank_names() {
        assert_eq!(
            parse_record(" ,Ygritte,3"),
            Err(RecordError::BlankName { field: 1 })
        );
        assert_eq!(
            parse_record("Jon,,3"),
            Err(RecordError::BlankName { field: 2 })
        );
    }

    #[test]
    fn parse_rejects_bad_weights() {
        assert_eq!(
            parse_record("Jon,Ygritte,three"),
            Err(RecordError::BadWeight {
                raw: "three".into()
            })
        );
        assert_eq!(
            parse_record("Jon,Ygritte,2.5"),
            Err(RecordError::BadWeight { raw: "2.5".into() })
        );
    }

    #[test]
    fn parse_accepts_non_positive_weights() {
        assert_eq!(parse_record("Jon,Ghost,0").unwrap().weight, 0);
        assert_eq!(parse_record("Jon,Ghost,-4").unwrap().weight, -4);
    }

    #[test]
    fn parse_ignores_trailing_commas() {
        let r = parse_record("Jon,Ygritte,3,").unwrap();
        assert_eq!(r.weight, 3);
        assert!(parse_record("Jon,Ygritte,3,,,").is_ok());
        assert_eq!(
            parse_record("Jon,Ygritte,"),
            Err(RecordError::FieldCount { found: 2 })
        );
    }

    #[test]
    fn non_positive_weight_registers_names_without_edge() {
        let mut g = Graph::new();
        let report = g.load(["Jon,Ghost,0", "Ghost,Nymeria,-2"]);
        assert!(report.is_clean());
        assert_eq!(report.edges, 2);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 0);
        assert!(g.has_path("Ghost", "Ghost"));
        assert!(!g.has_path("Jon", "Ghost"));
        assert_eq!(g.component_size("Jon"), 1);
    }

    #[test]
    fn load_skips_and_continues() {
        let mut g = Graph::new();
        let report = g.load(["Jon,Ygritte,3", "Jon,Ygritte", "Ygritte,Jon,1", "Sam,,2"]);
        assert_eq!(report.lines, 4);
        assert_eq!(report.edges, 2);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].line, 2);
        assert_eq!(report.skipped[1].line, 4);
        assert!(!report.is_clean());
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn from_reader_reads_all_lines() {
        let text = "A,B,1\nB,C,2\nC,A,3\n";
        let (g, report) = Graph::from_reader(text.as_bytes()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.edges, 3);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let err = Graph::from_path("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, cn_core::CnError::Io(_)));
    }
}
