/// The separator used when joining decrypted path segments.
// // 拼接解密路径段时使用的分隔符。
pub const PATH_SEPARATOR: char = '/';

/// Default upper bound on the number of entities visited while climbing a parent chain.
//
// // 向上遍历父链时访问实体数量的默认上限。
pub const MAX_TRAVERSAL_DEPTH: usize = 256;

/// Default file name of the configuration file.
// // 配置文件的默认文件名。
pub const CONFIG_FILE_NAME: &str = "syncmeta.json";

/// Default file name of the metadata database.
// // 元数据数据库的默认文件名。
pub const DATABASE_FILE_NAME: &str = "filelist.db";
