use clap::Parser;
use epp::cli::{
    handle_completions, handle_config_init, load_datastore, pick, pods, Cli, Commands,
    ConfigCommands,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => epp::cli::serve::run_serve(args).await,
        Commands::Pods(args) => match load_datastore(&args.config) {
            Ok(datastore) => pods::handle_pods(&args, &datastore).map(|output| {
                println!("{}", output);
            }),
            Err(e) => Err(e),
        },
        Commands::Pick(args) => match load_datastore(&args.config) {
            Ok(datastore) => pick::handle_pick(&args, datastore).await.map(|output| {
                println!("{}", output);
            }),
            Err(e) => Err(e),
        },
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
