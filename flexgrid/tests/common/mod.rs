pub mod test_net;
pub mod topologies;
