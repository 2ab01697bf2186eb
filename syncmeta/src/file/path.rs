use crate::common::constants::PATH_SEPARATOR;

/// Turns a node name into a path segment.
///
/// - `None` or an empty name yields `None`; that level is skipped when joining.
/// - Exactly **one** leading separator is removed: `"/a"` -> `"a"`, `"//a"` -> `"/a"`.
/// - A name that is empty after stripping (e.g. a root named `"/"`) also yields `None`.
//
// // 将一个节点名称转换为路径段。
// //
// // - 名称为 `None` 或空字符串时返回 `None`，该层级在拼接时被跳过。
// // - 只移除 **一个** 前导分隔符。
// // - 移除后为空 (例如根节点的名称 `"/"`) 同样返回 `None`，保证结果中没有空段。
pub fn name_segment(name: Option<&str>) -> Option<&str> {
    let name = name?;
    let segment = name.strip_prefix(PATH_SEPARATOR).unwrap_or(name);
    if segment.is_empty() { None } else { Some(segment) }
}

/// Reverses segments collected leaf-to-root and joins them with the separator.
///
/// - `["c.txt", "b", "a"]` -> `"a/b/c.txt"`
/// - `[]` -> `""`
///
/// The result has no leading separator.
//
// // 将按 "叶 -> 根" 顺序收集的路径段反转并用分隔符连接，结果不带前导分隔符。
pub fn join_leaf_to_root<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().rev().enumerate() {
        if i > 0 {
            out.push(PATH_SEPARATOR);
        }
        out.push_str(segment.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_segment() {
        assert_eq!(name_segment(Some("report.pdf")), Some("report.pdf"));
        assert_eq!(name_segment(Some("/Documents")), Some("Documents"));
        assert_eq!(name_segment(Some("//Documents")), Some("/Documents"));
        assert_eq!(name_segment(Some("")), None);
        assert_eq!(name_segment(None), None);
        assert_eq!(name_segment(Some("/")), None);
        // 只处理前导分隔符，结尾的保留
        assert_eq!(name_segment(Some("Photos/")), Some("Photos/"));
    }

    #[test]
    fn test_join_leaf_to_root() {
        assert_eq!(join_leaf_to_root(&["c.txt", "b", "a"]), "a/b/c.txt");
        assert_eq!(join_leaf_to_root(&["root.txt"]), "root.txt");
        let empty: [&str; 0] = [];
        assert_eq!(join_leaf_to_root(&empty), "");
        let owned = vec!["A".to_string(), "B".to_string()];
        assert_eq!(join_leaf_to_root(&owned[..]), "B/A");
    }
}
