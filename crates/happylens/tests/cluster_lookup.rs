//! Cluster lookup specifications: the assignment table is an opaque external
//! input, and every id it mentions must resolve to a description card.

use happylens::clusters::{self, ClusterId, ClusterTable};
use std::io::Cursor;

const ASSIGNMENTS: &str = "\
Country,iso_alpha,Cluster
Finland,FIN,2
Netherlands,NLD,2
Poland,POL,0
Czechia,CZE,0
Brazil,BRA,0
Ukraine,UKR,1
India,IND,1
Afghanistan,AFG,3
Lebanon,LBN,3
";

#[test]
fn dashboard_can_build_a_card_for_every_observed_cluster() {
    let table = ClusterTable::from_reader(Cursor::new(ASSIGNMENTS)).expect("table parses");

    for id in table.observed_ids() {
        let description = clusters::describe(id).expect("observed cluster is described");
        let members = table.clusters_of(id);

        assert_eq!(description.id, id);
        assert!(!members.is_empty());
        assert!(clusters::color_of(id).is_ok());
    }
}

#[test]
fn member_lists_are_disjoint_and_cover_the_table() {
    let table = ClusterTable::from_reader(Cursor::new(ASSIGNMENTS)).expect("table parses");

    let total: usize = table
        .observed_ids()
        .into_iter()
        .map(|id| table.clusters_of(id).len())
        .sum();
    assert_eq!(total, table.assignments().len());
}

#[test]
fn an_unobserved_id_still_fails_loudly() {
    assert!(clusters::describe(ClusterId(42)).is_err());
}
