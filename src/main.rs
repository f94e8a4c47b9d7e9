use clap::Parser;
use kaitori_diff::{builder, cli, config, error, scraper, show};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use kaitori_diff_common::{yen, DebugCounts};

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    log::debug!("command: {:?}", cli.command);

    let config = Config::load()?;

    match cli.command {
        Commands::Build { out_dir, dry_run } => {
            println!("📱 kaitori-diff - 差額データ生成\n");
            let client = scraper::build_client(&config)?;

            // 1. Apple公式価格
            println!("[1/3] Apple公式価格を取得中...");
            let apple = scraper::apple::scrape_prices_by_capacity(&client, &config.apple_pages).await?;
            println!("✔ {}件の価格を取得\n", apple.len());

            // 2. 森森買取価格
            println!("[2/3] 森森買取の新品価格を取得中...");
            let morimori = scraper::morimori::scrape_new_prices(&client, &config.morimori_url).await?;
            println!("✔ {}件の価格を取得\n", morimori.len());

            // 3. 差額
            println!("[3/3] 差額を計算中...");
            let rows = builder::build_diff_rows(&apple, &morimori);
            let counts = DebugCounts {
                apple_models: apple.len(),
                morimori_models: morimori.len(),
                matched_rows: rows.len(),
            };
            let meta = builder::build_meta(&config, &builder::jst_now()?, counts);
            println!("✔ {}件が一致\n", rows.len());

            if dry_run {
                for row in &rows {
                    println!("  {} {}", row.label(), yen(row.diff));
                }
                println!("\n(dry-run: ファイルは書き出していません)");
            } else {
                let out_dir = out_dir.unwrap_or_else(|| config.data_dir.clone());
                let (diff_path, meta_path) = builder::write_outputs(&out_dir, &rows, &meta)?;
                println!("✔ 保存: {}", diff_path.display());
                println!("✔ 保存: {}", meta_path.display());
                println!("\n✅ 完了");
            }
        }

        Commands::Show { data_dir, mode } => {
            let dir = data_dir.unwrap_or_else(|| config.data_dir.clone());
            let controller = show::show_ranking(&dir, mode.into()).await?;
            println!("{}", controller.page().render_text());
        }

        Commands::Base => {
            println!("🍎 Apple公式 最低価格\n");
            let client = scraper::build_client(&config)?;
            let prices = scraper::apple::scrape_base_prices(&client, &config.apple_pages).await?;
            for (model, price) in &prices {
                println!("  {:<20} {}円〜", model, kaitori_diff_common::group_thousands(*price));
            }
        }

        Commands::Config { set_user_agent, show } => {
            let mut config = config;

            if let Some(user_agent) = set_user_agent {
                config.set_user_agent(user_agent)?;
                println!("✔ User-Agentを設定しました");
            }

            if show {
                println!("設定:");
                println!("  User-Agent: {}", config.user_agent());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  出力先: {}", config.data_dir.display());
                println!("  森森買取: {}", config.morimori_url);
                for (model, url) in &config.apple_pages {
                    println!("  Apple {}: {}", model, url);
                }
            }
        }
    }

    Ok(())
}
