use clap::{Parser, Subcommand, ValueEnum};
use kaitori_diff_common::Mode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kaitori-diff")]
#[command(about = "iPhone 新品買取価格とApple定価の差額ランキング", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 価格ページを取得して diff.json / meta.json を生成
    Build {
        /// 出力ディレクトリ（デフォルト: 設定の data_dir）
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// ファイルを書き出さず件数のみ表示
        #[arg(long)]
        dry_run: bool,
    },

    /// 生成済みデータをランキング表示
    Show {
        /// データディレクトリ（デフォルト: 設定の data_dir）
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// 表示モード (profit/loss)
        #[arg(short, long, default_value = "profit")]
        mode: ModeArg,
    },

    /// Apple公式の最低価格（〜円から）を機種ごとに表示
    Base,

    /// 設定を表示/編集
    Config {
        /// User-Agentを設定
        #[arg(long)]
        set_user_agent: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Profit,
    Loss,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Profit => Mode::Profit,
            ModeArg::Loss => Mode::Loss,
        }
    }
}
