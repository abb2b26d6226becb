use crate::config::Opts;
use crate::tui::app::App;
use crate::tui::draw::draw_app;
use anyhow::bail;
use bellgraph::graph::node::NodeId;
use bellgraph::search::bellman_ford::BellmanFordSearch;
use bellgraph::search::distance::DistanceMap;
use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use log::info;
use std::time::Duration;

mod config;
mod tui;

fn print_table(dist: &DistanceMap<NodeId>) {
    println!("Vertex   Distance from Source");
    for (id, d) in dist {
        println!("{} \t\t {:.6}", id.index(), d);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    let (graph, scenario) = opts.build_scenario();
    let source = opts.source.map(NodeId).unwrap_or(scenario.source());
    if source.index() >= graph.vertex_count() {
        bail!(
            "source {} out of range, {} has {} vertices",
            source.index(),
            scenario.name(),
            graph.vertex_count()
        );
    }
    info!(
        "scenario {}: {} vertices, {} links, source {}",
        scenario.name(),
        graph.vertex_count(),
        graph.link_count(),
        source.index()
    );

    let mut search = BellmanFordSearch::new()
        .with_expansion(opts.expansion.into())
        .with_trace(opts.tui);
    search.init_graph(&graph.nodes());
    let result = search.search(&graph.node(source));

    if !opts.tui {
        match result {
            Ok(()) => print_table(search.distance_map()),
            Err(_) => println!("Graph contains negative weight cycle"),
        }
        return Ok(());
    }

    let trace = search.trace().cloned().unwrap_or_default();
    let mut terminal = ratatui::init();
    let mut app = App::new(scenario.name(), source, &graph, trace, result);

    while app.running {
        terminal.draw(|frame| draw_app(frame, &app))?;

        if crossterm::event::poll(Duration::from_millis(16))? {
            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') => app.running = false,
                    KeyCode::Char(' ') => app.step(),
                    KeyCode::Char('b') => app.back(),
                    _ => continue,
                },
                _ => continue,
            }
        }
    }
    Ok(())
}
