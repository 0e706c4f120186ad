use memsim::sim::block::Block;
use memsim::sim::block_list::BlockList;

fn owned(start: u64, end: u64, owner: u32) -> Block {
    Block { start, end, owner }
}

#[test]
fn test_push_and_pop_order() {
    let mut list = BlockList::new();
    list.push_back(Block::free(0, 9));
    list.push_back(Block::free(10, 19));
    list.push_front(Block::free(20, 29));

    assert_eq!(list.len(), 3);
    assert_eq!(list.pop_front().unwrap(), Block::free(20, 29));
    assert_eq!(list.pop_front().unwrap(), Block::free(0, 9));
    assert_eq!(list.pop_front().unwrap(), Block::free(10, 19));
    assert!(list.pop_front().is_none());
    assert!(list.is_empty());
}

#[test]
fn test_insert_by_address_keeps_ascending_order() {
    let mut list = BlockList::new();
    list.insert_by_address(Block::free(50, 59));
    list.insert_by_address(Block::free(0, 9));
    list.insert_by_address(Block::free(20, 29));
    list.insert_by_address(Block::free(60, 99));

    let starts: Vec<u64> = list.iter().map(|b| b.start).collect();
    assert_eq!(starts, vec![0, 20, 50, 60]);
}

#[test]
fn test_insert_by_size_desc_orders_largest_first() {
    let mut list = BlockList::new();
    list.insert_by_size_desc(owned(0, 9, 1)); // size 10
    list.insert_by_size_desc(owned(10, 29, 2)); // size 20
    list.insert_by_size_desc(owned(30, 34, 3)); // size 5

    let owners: Vec<u32> = list.iter().map(|b| b.owner).collect();
    assert_eq!(owners, vec![2, 1, 3]);
}

#[test]
fn test_insert_by_size_desc_ties_keep_arrival_order() {
    let mut list = BlockList::new();
    list.insert_by_size_desc(owned(0, 9, 1));
    list.insert_by_size_desc(owned(10, 19, 2)); // same size as pid 1
    list.insert_by_size_desc(owned(20, 24, 3));

    let owners: Vec<u32> = list.iter().map(|b| b.owner).collect();
    assert_eq!(owners, vec![1, 2, 3]);
}

#[test]
fn test_position_and_remove_first_match() {
    let mut list = BlockList::new();
    list.push_back(owned(0, 9, 1));
    list.push_back(owned(10, 19, 2));
    list.push_back(owned(20, 29, 2));

    let idx = list.position(|b| b.owner == 2).unwrap();
    assert_eq!(idx, 1);
    let removed = list.remove(idx);
    assert_eq!(removed, owned(10, 19, 2));

    // the later block owned by pid 2 is untouched
    let owners: Vec<u32> = list.iter().map(|b| b.owner).collect();
    assert_eq!(owners, vec![1, 2]);
}

#[test]
fn test_merge_with_next_spans_both_ranges() {
    let mut list = BlockList::new();
    list.push_back(Block::free(0, 39));
    list.push_back(Block::free(40, 99));

    list.merge_with_next(0);
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0).unwrap(), &Block::free(0, 99));
}
