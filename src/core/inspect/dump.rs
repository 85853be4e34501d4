//=========================================================================
// Dump
//=========================================================================
//
// Indented text rendering of a node tree.
//
// Line shapes:
// ```text
//   <indent><key>:            composite value, children follow at indent+1
//   <indent><key>: <value>    terminal value
//   <indent><value>           terminal passed as the root
// ```
//
// Entries appear in key order (indices, then names).
//
//=========================================================================

//=== External Crates =====================================================

use log::debug;

//=== Internal Imports ====================================================

use super::PathGuard;
use crate::core::config::InspectorConfig;
use crate::core::error::Result;
use crate::core::node::{Node, Table};
use crate::core::sink::DumpSink;

//=== Public API ==========================================================

/// Writes `node` to `sink` starting at indentation level `indent`.
///
/// Returns the number of lines written. On error, lines already written
/// stay in the sink.
///
/// # Errors
///
/// - [`CycleDetected`](crate::InspectError::CycleDetected) if a table
///   contains one of its enclosing tables
/// - [`DepthExceeded`](crate::InspectError::DepthExceeded) past
///   `config.max_depth`
/// - any error raised by the sink
pub fn dump<S>(node: &Node, indent: usize, sink: &mut S, config: &InspectorConfig) -> Result<usize>
where
    S: DumpSink + ?Sized,
{
    let mut walk = DumpWalk {
        sink,
        unit: &config.indent,
        guard: PathGuard::new(node, config.max_depth),
        lines: 0,
    };

    match node {
        Node::Composite(table) => walk.table(table, indent)?,
        Node::Terminal(scalar) => {
            let line = format!("{}{}", walk.prefix(indent), scalar);
            walk.emit(&line)?;
        }
        Node::Absent => {
            if let Some(marker) = &config.absent_marker {
                let line = format!("{}{}", walk.prefix(indent), marker);
                walk.emit(&line)?;
            }
        }
    }

    debug!(target: "inspector", "Dumped {} line(s)", walk.lines);
    Ok(walk.lines)
}

//=== DumpWalk ============================================================

struct DumpWalk<'a, S: ?Sized> {
    sink: &'a mut S,
    unit: &'a str,
    guard: PathGuard,
    lines: usize,
}

impl<S: DumpSink + ?Sized> DumpWalk<'_, S> {
    fn table(&mut self, table: &Table, level: usize) -> Result<()> {
        let entries = table.entries();
        let prefix = self.prefix(level);

        for (key, value) in entries.iter() {
            match value {
                Node::Composite(child) => {
                    self.guard.descend(key, child)?;
                    self.emit(&format!("{}{}: ", prefix, key))?;
                    self.table(child, level + 1)?;
                    self.guard.ascend();
                }
                Node::Terminal(scalar) => {
                    self.emit(&format!("{}{}: {}", prefix, key, scalar))?;
                }
                // Tables drop absent values on insert.
                Node::Absent => {}
            }
        }
        Ok(())
    }

    fn prefix(&self, level: usize) -> String {
        self.unit.repeat(level)
    }

    fn emit(&mut self, line: &str) -> Result<()> {
        self.sink.write_line(line)?;
        self.lines += 1;
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::InspectError;
    use crate::core::node::{to_node, Key};

    //--- Test Helpers -----------------------------------------------------

    fn render(node: &Node) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        dump(node, 0, &mut lines, &InspectorConfig::default()).unwrap();
        lines
    }

    fn tracker_state() -> Node {
        to_node(&serde_json::json!({
            "fps": 59.5,
            "keys": ["W", "Space"],
        }))
        .unwrap()
    }

    /// Counts key/value pairs reachable from `node`.
    fn count_pairs(node: &Node) -> usize {
        match node {
            Node::Composite(table) => table
                .entries()
                .values()
                .map(|value| 1 + count_pairs(value))
                .sum(),
            _ => 0,
        }
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn renders_nested_tables_with_indentation() {
        assert_eq!(
            render(&tracker_state()),
            vec!["fps: 59.5", "keys: ", "  1: W", "  2: Space"]
        );
    }

    #[test]
    fn one_line_per_reachable_pair() {
        let node = to_node(&serde_json::json!({
            "a": { "b": { "c": 1, "d": [true, false] } },
            "e": "x",
        }))
        .unwrap();

        let lines = render(&node);
        assert_eq!(lines.len(), count_pairs(&node));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn starting_indent_and_custom_unit() {
        let config = InspectorConfig {
            indent: "--".into(),
            ..InspectorConfig::default()
        };
        let mut lines: Vec<String> = Vec::new();
        let written = dump(&tracker_state(), 1, &mut lines, &config).unwrap();

        assert_eq!(written, 4);
        assert_eq!(lines[0], "--fps: 59.5");
        assert_eq!(lines[3], "----2: Space");
    }

    #[test]
    fn terminal_root_is_a_single_line() {
        assert_eq!(render(&Node::from(5)), vec!["5"]);
    }

    #[test]
    fn absent_root_uses_the_marker_when_configured() {
        assert!(render(&Node::Absent).is_empty());

        let config = InspectorConfig {
            absent_marker: Some("nil".into()),
            ..InspectorConfig::default()
        };
        let mut lines: Vec<String> = Vec::new();
        dump(&Node::Absent, 2, &mut lines, &config).unwrap();
        assert_eq!(lines, vec!["    nil"]);
    }

    #[test]
    fn empty_composite_writes_nothing() {
        assert!(render(&Node::composite()).is_empty());
    }

    #[test]
    fn aliased_tables_are_dumped_per_path() {
        let shared = Table::from_iter([("v", 1)]);
        let root = Table::new();
        root.set("left", shared.clone());
        root.set("right", shared);

        assert_eq!(
            render(&Node::from(root)),
            vec!["left: ", "  v: 1", "right: ", "  v: 1"]
        );
    }

    #[test]
    fn cycles_fail_instead_of_looping() {
        let root = Table::new();
        root.set("name", "loop");
        let child = Table::new();
        child.set("parent", root.clone());
        root.set("child", child);

        let mut lines: Vec<String> = Vec::new();
        let err = dump(&Node::from(root), 0, &mut lines, &InspectorConfig::default())
            .unwrap_err();

        match err {
            InspectError::CycleDetected { path } => assert_eq!(path, "child.parent"),
            other => panic!("unexpected error: {}", other),
        }
        // Output written before the cycle stays.
        assert_eq!(lines, vec!["child: "]);
    }

    #[test]
    fn depth_budget_is_enforced() {
        let node = to_node(&serde_json::json!({ "a": { "b": { "c": {} } } })).unwrap();
        let config = InspectorConfig {
            max_depth: 2,
            ..InspectorConfig::default()
        };
        let err = dump(&node, 0, &mut Vec::<String>::new(), &config).unwrap_err();
        assert!(matches!(err, InspectError::DepthExceeded { limit: 2 }));

        let config = InspectorConfig {
            max_depth: 3,
            ..InspectorConfig::default()
        };
        assert!(dump(&node, 0, &mut Vec::<String>::new(), &config).is_ok());
    }

    #[test]
    fn dump_does_not_mutate_the_tree() {
        let node = tracker_state();
        render(&node);
        let keys = node.lookup(&Key::from("keys"));
        assert_eq!(keys.as_table().unwrap().len(), 2);
    }
}
