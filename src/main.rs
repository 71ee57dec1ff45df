use clap::Parser;
use posttag::application::{
    init::init, AutoTagService, BatchReport, ConfigService, ListTagsService, ModifyTagsService,
    PostSelection, TagChange,
};
use posttag::cli::{format_changes, format_counts, format_failures, format_tag_list, Cli, Commands};
use posttag::domain::tags::{AutoTagger, ListMode};
use posttag::error::PostTagError;
use posttag::infrastructure::logging::init_logging;
use posttag::infrastructure::FileSystemPostStore;

/// Exit code when some posts of a batch failed
const PARTIAL_FAILURE: i32 = 6;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<i32, PostTagError> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized posttag site at {}", path.display());
            Ok(0)
        }
        Commands::Add {
            tags,
            posts,
            dry_run,
        } => {
            let service = ModifyTagsService::new(FileSystemPostStore::discover()?);
            report_changes(service.add(&tags, &PostSelection::from_args(posts), dry_run)?)
        }
        Commands::Remove {
            tags,
            posts,
            dry_run,
        } => {
            let service = ModifyTagsService::new(FileSystemPostStore::discover()?);
            report_changes(service.remove(&tags, &PostSelection::from_args(posts), dry_run)?)
        }
        Commands::Merge {
            tags,
            posts,
            dry_run,
        } => {
            let service = ModifyTagsService::new(FileSystemPostStore::discover()?);
            report_changes(service.merge(&tags, &PostSelection::from_args(posts), dry_run)?)
        }
        Commands::Sort { posts, dry_run } => {
            let service = ModifyTagsService::new(FileSystemPostStore::discover()?);
            report_changes(service.sort(&PostSelection::from_args(posts), dry_run)?)
        }
        Commands::Autotag { posts, dry_run } => {
            let store = FileSystemPostStore::discover()?;
            // No linguistic toolkit ships with the binary
            let tagger = AutoTagger::new(&store.config.autotag, None);
            let service = AutoTagService::new(store, tagger);
            report_changes(service.execute(&PostSelection::from_args(posts), dry_run)?)
        }
        Commands::List { sort, posts } => {
            let mode: ListMode = sort.parse()?;
            let selection = PostSelection::from_args(posts);
            let service = ListTagsService::new(FileSystemPostStore::discover()?);
            let code = match mode {
                ListMode::Alpha => {
                    let listing = service.list(&selection, mode)?;
                    println!("{}", format_tag_list(&listing.value).trim_end());
                    report_failures(&listing.report)
                }
                ListMode::Count => {
                    let counts = service.counts(&selection)?;
                    println!("{}", format_counts(&counts.value).trim_end());
                    report_failures(&counts.report)
                }
            };
            Ok(code)
        }
        Commands::Search { pattern, posts } => {
            let service = ListTagsService::new(FileSystemPostStore::discover()?);
            let found = service.search(&PostSelection::from_args(posts), &pattern)?;
            println!("{}", format_tag_list(&found.value).trim_end());
            Ok(report_failures(&found.report))
        }
        Commands::Config { key, value, list } => {
            let store = FileSystemPostStore::discover()?;
            let service = ConfigService::new(store.root);

            if list {
                for (key, value) in service.list()? {
                    println!("{} = {}", key, value);
                }
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: posttag config [--list | <key> [<value>]]");
            }
            Ok(0)
        }
    }
}

fn report_changes(report: BatchReport<TagChange>) -> Result<i32, PostTagError> {
    print!("{}", format_changes(&report));
    Ok(report_failures(&report))
}

fn report_failures<T>(report: &BatchReport<T>) -> i32 {
    if report.has_failures() {
        eprint!("{}", format_failures(report));
        PARTIAL_FAILURE
    } else {
        0
    }
}
