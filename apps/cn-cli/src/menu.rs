//! Interactive numbered menu over a loaded network.

use std::io::{self, BufRead, Write};

use cn_graph::Graph;

use crate::query::{self, Query};

const MENU: &str = "
Choose an operation:
1. IsThereAPath
2. AllPathsShorterThanEqualTo
3. ShortestPathLengthFromTo
4. NoOfPathsFromTo
5. BFSfromTo
6. DFSfromTo
7. NoOfVerticesInComponent
8. Exit";

/// Prompt-driven session reading answers line by line.
pub struct Menu<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Loop until the user picks Exit or input runs out.
    pub fn run(&mut self, graph: &Graph) -> io::Result<()> {
        loop {
            writeln!(self.out, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };

            let request = match choice.trim().parse::<u8>() {
                Ok(8) => {
                    writeln!(self.out, "Exiting...")?;
                    return Ok(());
                }
                Ok(n @ 1..=7) => match self.read_query(n)? {
                    Some(request) => request,
                    // Input ended mid-query.
                    None => return Ok(()),
                },
                Ok(_) => {
                    tracing::warn!(choice = choice.trim(), "invalid menu choice");
                    continue;
                }
                Err(_) => {
                    tracing::warn!(choice = choice.trim(), "menu choice is not an integer");
                    continue;
                }
            };

            match request {
                Ok(request) => query::run(graph, &request, &mut self.out)?,
                Err(what) => tracing::warn!(what, "invalid input"),
            }
        }
    }

    /// Collect the arguments for menu entry `choice` (1..=7).
    ///
    /// Outer `None`: input exhausted. Inner `Err`: a numeric field did not parse.
    fn read_query(&mut self, choice: u8) -> io::Result<Option<Result<Query, &'static str>>> {
        let query = match choice {
            1 | 3 | 4 | 5 | 6 => {
                let Some((from, to)) = self.prompt_pair()? else {
                    return Ok(None);
                };
                match choice {
                    1 => Query::HasPath { from, to },
                    3 => Query::ShortestHops { from, to },
                    4 => Query::CountPaths { from, to },
                    5 => Query::Bfs { from, to },
                    _ => Query::Dfs { from, to },
                }
            }
            2 => {
                let Some(max_hops) = self.prompt("Enter pathLen: ")? else {
                    return Ok(None);
                };
                let Ok(max_hops) = max_hops.trim().parse::<i64>() else {
                    return Ok(Some(Err("path length must be an integer")));
                };
                let Some(min_vertices) = self.prompt("Enter vertexNo: ")? else {
                    return Ok(None);
                };
                let Ok(min_vertices) = min_vertices.trim().parse::<i64>() else {
                    return Ok(Some(Err("vertex count must be an integer")));
                };
                let Some(start) = self.prompt("Enter name1: ")? else {
                    return Ok(None);
                };
                Query::PathsUpTo {
                    max_hops,
                    min_vertices,
                    start,
                }
            }
            _ => {
                let Some(of) = self.prompt("Enter name1: ")? else {
                    return Ok(None);
                };
                Query::ComponentSize { of }
            }
        };
        Ok(Some(Ok(query)))
    }

    fn prompt_pair(&mut self) -> io::Result<Option<(String, String)>> {
        let Some(from) = self.prompt("Enter name1: ")? else {
            return Ok(None);
        };
        let Some(to) = self.prompt("Enter name2: ")? else {
            return Ok(None);
        };
        Ok(Some((from, to)))
    }

    /// Print `label` and read one line without its terminator; `None` at EOF.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
