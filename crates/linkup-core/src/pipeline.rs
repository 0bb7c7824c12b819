use linkup_schema::{Connection, LeadStatus};

/// Partition connections into kanban columns, one per status in display
/// order. Every column is present even when empty, and each connection
/// keeps its scan-order position within its column.
pub fn group_by_status(connections: &[Connection]) -> Vec<(LeadStatus, Vec<&Connection>)> {
    let mut groups: Vec<(LeadStatus, Vec<&Connection>)> = LeadStatus::ALL
        .iter()
        .map(|status| (*status, Vec::new()))
        .collect();
    for connection in connections {
        if let Some((_, group)) = groups
            .iter_mut()
            .find(|(status, _)| *status == connection.status)
        {
            group.push(connection);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn(link: &str, status: LeadStatus) -> Connection {
        let mut c = Connection::new(link, "");
        c.status = status;
        c
    }

    #[test]
    fn partitions_without_loss_or_duplication() {
        let connections = vec![
            conn("t.me/aaa_one", LeadStatus::New),
            conn("t.me/bbb_two", LeadStatus::Converted),
            conn("t.me/ccc_three", LeadStatus::New),
            conn("t.me/ddd_four", LeadStatus::Interested),
        ];
        let groups = group_by_status(&connections);

        let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
        assert_eq!(total, connections.len());

        // Relative order within a column matches scan order.
        let new_links: Vec<&str> = groups[0].1.iter().map(|c| c.user_link.as_str()).collect();
        assert_eq!(new_links, vec!["t.me/aaa_one", "t.me/ccc_three"]);
    }

    #[test]
    fn columns_follow_display_order_and_include_empty() {
        let groups = group_by_status(&[]);
        let order: Vec<LeadStatus> = groups.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, LeadStatus::ALL.to_vec());
        assert!(groups.iter().all(|(_, g)| g.is_empty()));
    }

    #[test]
    fn moved_connection_appears_in_one_column_only() {
        let connections = vec![conn("t.me/alice99", LeadStatus::Interested)];
        let groups = group_by_status(&connections);
        for (status, group) in groups {
            if status == LeadStatus::Interested {
                assert_eq!(group.len(), 1);
            } else {
                assert!(group.is_empty());
            }
        }
    }
}
