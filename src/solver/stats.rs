use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

/// Search node counts, per depth.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    generated: Vec<usize>,
    expanded: Vec<usize>,
    duplicates: Vec<usize>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes_generated(&self) -> usize {
        self.generated.iter().sum()
    }

    pub fn nodes_expanded(&self) -> usize {
        self.expanded.iter().sum()
    }

    /// Nodes popped from the frontier after an equal state was already expanded.
    pub fn reached_duplicates(&self) -> usize {
        self.duplicates.iter().sum()
    }

    /// Deepest depth at which anything was generated.
    pub fn max_depth(&self) -> usize {
        self.generated.len().saturating_sub(1)
    }

    pub(crate) fn add_generated(&mut self, depth: u32) -> bool {
        Self::add(&mut self.generated, depth)
    }

    pub(crate) fn add_expanded(&mut self, depth: u32) -> bool {
        Self::add(&mut self.expanded, depth)
    }

    pub(crate) fn add_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicates, depth)
    }

    /// Returns true when this is the first node at `depth`.
    fn add(counts: &mut Vec<usize>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;

        // while because depths can be skipped - duplicates are only counted when reached
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    /// Per-depth breakdown.
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Generated"),
            Cell::new("Expanded"),
            Cell::new("Duplicates"),
            Cell::new("Not reached"),
        ]));

        // generated is the longest vec
        for (depth, &generated) in self.generated.iter().enumerate() {
            let expanded = self.expanded.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicates.get(depth).cloned().unwrap_or(0);
            let left = generated - expanded - duplicates;
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&generated.separated_string()),
                Cell::new(&expanded.separated_string()),
                Cell::new(&duplicates.separated_string()),
                Cell::new(&left.separated_string()),
            ]));
        }
        table
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} nodes generated", self.nodes_generated())?;
        writeln!(f, "{} nodes expanded", self.nodes_expanded())
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "generated by depth: {:?}", self.generated)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicates)?;
        writeln!(f, "total generated: {}", self.nodes_generated().separated_string())?;
        writeln!(f, "total expanded: {}", self.nodes_expanded().separated_string())?;
        writeln!(f, "total reached duplicates: {}", self.reached_duplicates().separated_string())
    }
}
