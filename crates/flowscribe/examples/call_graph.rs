//! Renders a small function call graph and writes it to `diagram.mmd`.
//!
//! Run with `cargo run -p flowscribe --example call_graph`.

use std::fs;

use flowscribe::{Flowchart, FlowscribeError, Link, MermaidBuilder, Node};

const CALLS: [(&str, &str); 5] = [
    ("Main", "FunctionA"),
    ("FunctionA", "FunctionB"),
    ("FunctionB", "FunctionC"),
    ("FunctionC", "FunctionD"),
    ("Main", "FunctionE"),
];

fn main() -> Result<(), FlowscribeError> {
    let mut chart = Flowchart::vertical(Some("Call Graph"));

    for (caller, callee) in CALLS {
        let caller = Node::subprocess(caller, None);
        let callee = Node::subprocess(callee, None);
        chart.add_link(Link::solid(&caller, &callee, None))?;

        for node in [caller, callee] {
            if !chart.contains_name(node.name()) {
                chart.add_node(node)?;
            }
        }
    }

    let text = MermaidBuilder::default().render(&chart)?;
    fs::write("diagram.mmd", &text)?;

    println!("Mermaid diagram generated: diagram.mmd");
    Ok(())
}
