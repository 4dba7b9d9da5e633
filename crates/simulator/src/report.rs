//! Plain-text rendering of routing tables.

use routesim_routing::RoutingTables;

/// Render all tables as one line per node: `A: B=1 C=2 D=3`.
///
/// Unreachable link-state entries render as `inf`; an empty table
/// renders as `-`.
pub fn render_tables(tables: &RoutingTables) -> String {
    let mut out = String::new();
    for (node, table) in tables {
        out.push_str(node.as_str());
        out.push(':');
        if table.is_empty() {
            out.push_str(" -");
        }
        for (dest, cost) in table {
            out.push_str(&format!(" {dest}={cost}"));
        }
        out.push('\n');
    }
    out
}
