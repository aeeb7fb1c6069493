use clap::{Parser, ValueEnum};
use common::io::{read_network, NetworkFileType};
use network_motifs::analysis::node_roles;
use network_motifs::census::Algorithm;
use network_motifs::randomizer::{NullModel, RandomizerConfig};
use network_motifs::search::{motif_search, SearchConfig, SearchResult};
use network_motifs::significance::MotifCriteria;
use network_motifs::{Network, NetworkProperties};
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Algo {
    Induced,
    NonInduced,
    Esu,
    Triadic,
    Specific,
}

impl From<Algo> for Algorithm {
    fn from(algo: Algo) -> Self {
        match algo {
            Algo::Induced => Algorithm::BacktrackingInduced,
            Algo::NonInduced => Algorithm::BacktrackingNonInduced,
            Algo::Esu => Algorithm::Esu,
            Algo::Triadic => Algorithm::TriadicCensus,
            Algo::Specific => Algorithm::Specific,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Model {
    MarkovChain,
    ErdosRenyi,
}

impl From<Model> for NullModel {
    fn from(model: Model) -> Self {
        match model {
            Model::MarkovChain => NullModel::MarkovChainSwitching,
            Model::ErdosRenyi => NullModel::ErdosRenyi,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Finds network motifs in a directed network")]
struct Cli {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, value_enum, default_value_t = NetworkFileType::EdgeList)]
    input_type: NetworkFileType,
    /// One node name per line.
    #[arg(long)]
    names: Option<PathBuf>,
    #[arg(short, default_value_t = 3)]
    k: usize,
    #[arg(long, value_enum, default_value_t = Algo::Induced)]
    algorithm: Algo,
    #[arg(long, default_value_t = 1000)]
    network_amount: usize,
    #[arg(long, default_value_t = 10)]
    switch_factor: usize,
    #[arg(long, value_enum, default_value_t = Model::MarkovChain)]
    null_model: Model,
    #[arg(long, default_value_t = 0.01)]
    alpha: f64,
    #[arg(long, default_value_t = 0.1)]
    frequency_threshold: f64,
    #[arg(long, default_value_t = 3)]
    uniqueness_threshold: usize,
    #[arg(long)]
    use_uniqueness: bool,
    #[arg(long)]
    allow_self_loops: bool,
    /// Skip splitting the motifs by the polarity of their edges.
    #[arg(long)]
    no_polarity: bool,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Number of node roles printed per motif.
    #[arg(long, default_value_t = 5)]
    top_roles: usize,
    #[arg(long)]
    log_level: Option<Level>,
}

impl Cli {
    fn config(&self) -> SearchConfig {
        SearchConfig {
            k: self.k,
            algorithm: self.algorithm.into(),
            allow_self_loops: self.allow_self_loops,
            network_amount: self.network_amount,
            randomizer: RandomizerConfig {
                model: self.null_model.into(),
                switch_factor: self.switch_factor,
                allow_self_loops: self.allow_self_loops,
                seed: self.seed,
            },
            criteria: MotifCriteria {
                alpha: self.alpha,
                frequency_threshold: self.frequency_threshold,
                uniqueness_threshold: self.uniqueness_threshold,
                use_uniqueness: self.use_uniqueness,
            },
            polarity_search: !self.no_polarity,
        }
    }
}

fn print_properties(properties: &NetworkProperties) {
    println!("nodes            {}", properties.nodes);
    println!("edges            {}", properties.edges);
    println!("density          {:.5}", properties.density);
    println!("self-loops       {}", properties.self_loops);
    println!("mutual pairs     {}", properties.mutual_pairs);
    println!("mean degree      {:.3}", properties.mean_degree);
    println!("max in-degree    {}", properties.max_in_degree);
    println!("max out-degree   {}", properties.max_out_degree);
    if let Some(ratio) = properties.polarity_ratio {
        println!("E/I ratio        {ratio:.3}");
    }
    println!();
}

fn format_option(value: Option<f64>) -> String {
    value.map(|x| format!("{x:.3e}")).unwrap_or_else(|| "-".to_string())
}

fn print_motifs(result: &SearchResult) {
    println!(
        "{:>8}  {:<18}  {:>8}  {:>10}  {:>9}  {:>10}  {:>10}  {:>5}  {:<11}",
        "id", "name", "n_real", "n_rand", "std", "z", "p", "uniq", "verdict"
    );
    for motif in result.motifs.values() {
        let name = motif.name.map(|name| name.label()).unwrap_or("");
        match &motif.verdict {
            Some(verdict) => println!(
                "{:>8}  {:<18}  {:>8}  {:>10.2}  {:>9.2}  {:>10}  {:>10}  {:>5}  {:<11}",
                motif.id.value(),
                name,
                motif.n_real,
                verdict.n_rand,
                verdict.std,
                format_option(verdict.z_score),
                format_option(verdict.p_value),
                verdict.uniq.map(|u| u.to_string()).unwrap_or_else(|| "-".to_string()),
                verdict.kind.to_string()
            ),
            None => println!("{:>8}  {:<18}  {:>8}", motif.id.value(), name, motif.n_real),
        }
    }
    println!();
}

fn print_polarity_motifs(result: &SearchResult) {
    for motif in result.motifs.values() {
        for polarity_motif in &motif.polarity_motifs {
            let Some(verdict) = polarity_motif.verdict.as_ref().filter(|v| v.is_motif()) else {
                continue;
            };
            println!(
                "{} {} {:?}: n_real {} n_rand {:.2} z {}",
                motif.label(),
                polarity_motif.polarity_label(),
                motif.role_pattern(),
                polarity_motif.n_real,
                verdict.n_rand,
                format_option(verdict.z_score)
            );
        }
    }
}

fn print_roles(result: &SearchResult, network: &Network, top: usize) {
    for motif in result.significant() {
        println!("{} {:?}", motif.label(), motif.role_pattern());
        for (role, nodes) in node_roles(&motif.occurrences, &motif.adjacency, network) {
            let nodes: Vec<_> = nodes.iter().take(top).map(|(node, count)| format!("{node} ({count})")).collect();
            println!("  {role}: {}", nodes.join(", "));
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(level) = cli.log_level {
        let subscriber = FmtSubscriber::builder().with_max_level(level).with_span_events(FmtSpan::CLOSE).finish();
        subscriber.init();
    };

    let start = Instant::now();
    let network = read_network(&cli.input, cli.input_type, cli.names.as_ref())?;
    info!(nodes = network.node_count(), edges = network.edge_count(), time = ?start.elapsed(), "read network");
    print_properties(&network.properties());

    let config = cli.config();
    let table = config.table()?;
    let start = Instant::now();
    let result = motif_search(&network, &table, &config)?;
    info!(time = ?start.elapsed(), acceptance_rate = result.switching.acceptance_rate(), "motif search");

    print_motifs(&result);
    print_polarity_motifs(&result);
    print_roles(&result, &network, cli.top_roles);
    Ok(())
}
