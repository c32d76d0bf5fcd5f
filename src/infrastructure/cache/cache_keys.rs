pub fn group_snapshot_key(group_id: &str) -> String {
    format!("group_snapshot:{}", group_id)
}
