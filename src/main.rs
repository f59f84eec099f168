use clap::Parser;
use seoinject::application::{apply, normalize, render_page, ApplyOptions};
use seoinject::cli::{
    format_apply_report, format_normalize_report, format_page_list, Cli, Commands,
};
use seoinject::error::SeoError;
use seoinject::infrastructure::{SeoConfig, SiteTree};
use seoinject::{debug, logger};
use std::fs;

fn main() {
    let cli = Cli::parse();
    logger::set_verbose(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), SeoError> {
    match cli.command {
        Commands::Apply {
            path,
            config,
            dry_run,
            skip_normalize,
        } => {
            let site = SiteTree::open(&path)?;
            let (config, source) = SeoConfig::resolve(&path, config.as_deref())?;
            debug!("config"; "{} ({} pages)", source, config.pages.len());

            let report = apply(
                &site,
                &config,
                ApplyOptions {
                    dry_run,
                    skip_normalize,
                },
            )?;

            if let Some(normalized) = &report.normalize {
                print!("{}", format_normalize_report(normalized));
            }
            print!("{}", format_apply_report(&report));

            match report.failed() {
                0 => Ok(()),
                n => Err(SeoError::FilesFailed(n)),
            }
        }
        Commands::Normalize { path, dry_run } => {
            let site = SiteTree::open(&path)?;
            let report = normalize(&site, dry_run);
            print!("{}", format_normalize_report(&report));

            match report.failed.len() {
                0 => Ok(()),
                n => Err(SeoError::FilesFailed(n)),
            }
        }
        Commands::Pages { path, config } => {
            let (config, source) = SeoConfig::resolve(&path, config.as_deref())?;
            println!("Config: {}", source);
            print!("{}", format_page_list(&config.pages, &config.site.primary_page));
            Ok(())
        }
        Commands::Render {
            page,
            input,
            root,
            config,
        } => {
            let (config, source) = SeoConfig::resolve(&root, config.as_deref())?;
            debug!("config"; "{}", source);

            if !config.is_configured(&page) {
                return Err(SeoError::UnknownPage(page));
            }

            let html = match input {
                Some(file) => fs::read_to_string(file)?,
                None => SiteTree::open(&root)?.read_page(&page)?,
            };

            print!("{}", render_page(&config, &page, &html)?);
            Ok(())
        }
    }
}
