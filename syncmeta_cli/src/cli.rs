use std::path::PathBuf;
use clap::{Parser, Subcommand};
use syncmeta::common::constants::CONFIG_FILE_NAME;
use syncmeta::file::FileId;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 配置文件路径
    #[arg(short = 'c', long = "config", value_name = "FILE", default_value = CONFIG_FILE_NAME, global = true)]
    pub config: PathBuf,

    /// 加密数据库的密钥 (未提供时读取环境变量 SYNCMETA_DB_KEY)
    #[arg(long = "key", value_name = "KEY", global = true)]
    pub key: Option<String>,

    /// 提高日志级别 (-v 为 debug，-vv 为 trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 创建一个新的元数据数据库并写入配置文件
    Init {
        /// 当前账户名
        #[arg(short = 'a', long = "account", required = true)]
        account: String,

        /// 数据库文件路径 (相对路径以配置文件所在目录为基准)
        #[arg(short = 'd', long = "database", value_name = "FILE")]
        database: Option<PathBuf>,

        /// 要求加密数据库；没有 --key 或 SYNCMETA_DB_KEY 时报错 (提供了密钥时总是加密)
        #[arg(short = 'e', long = "encrypt")]
        encrypt: bool,
    },
    /// 向数据库添加一条文件记录，并打印其 ID
    Add {
        /// 加密的远程路径
        #[arg(short = 'r', long = "remote-path", required = true)]
        remote_path: String,

        /// 解密后的显示名称
        #[arg(short = 'n', long = "name")]
        name: Option<String>,

        /// 父记录的 ID
        #[arg(short = 'p', long = "parent")]
        parent: Option<FileId>,
    },
    /// 打印一条记录的解密路径
    Path {
        /// 加密的远程路径
        #[arg(short = 'r', long = "remote-path", required = true)]
        remote_path: String,
    },
    /// 列出某个父记录的直接子记录
    #[command(visible_alias = "ls")]
    List {
        /// 父记录的 ID (省略时列出根条目)
        #[arg(short = 'p', long = "parent")]
        parent: Option<FileId>,
    },
}
