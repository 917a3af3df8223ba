//! Demo command
//!
//! Usage: grove demo [--edges]

use clap::Args;
use grove_core::ops::mutator;
use grove_core::{render_with, ExError, GroveStore, NodeType};

use crate::config::RenderOptions;

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Print the edge log as JSON instead of HTML
    #[arg(long)]
    pub edges: bool,

    #[command(flatten)]
    pub render: RenderOptions,
}

pub fn execute(args: DemoArgs) -> anyhow::Result<()> {
    let config = args.render.resolve()?;
    let (store, body, body_type) = build().map_err(ExError::from)?;

    if args.edges {
        let json = store.to_edge_log().to_json_pretty().map_err(ExError::from)?;
        println!("{}", json);
        return Ok(());
    }

    let html = render_with(&store, body, &body_type, &config).map_err(ExError::from)?;
    println!("{}", html);
    Ok(())
}

/// `<body><a href="http://example.com">Click here</a><p>Hello, world!</p></body>`
fn build() -> grove_core::Result<(GroveStore, grove_core::NodeId, NodeType)> {
    let body_type = NodeType::element("body")?;
    let mut store = GroveStore::new();
    let body = store.declare_root(body_type.clone())?;

    let a = mutator::append_first_child(&mut store, body, "a")?;
    mutator::append_attribute(&mut store, a.node_id, "href", "http://example.com")?;
    mutator::append_leaf_first_child(&mut store, a.node_id, "Click here")?;
    let p = mutator::append_next_sibling(&mut store, a.node_id, "p")?;
    mutator::append_leaf_first_child(&mut store, p.node_id, "Hello, world!")?;

    Ok((store, body, body_type))
}
