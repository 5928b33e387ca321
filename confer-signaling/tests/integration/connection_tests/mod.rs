mod test_concurrent_connect_rejected;
mod test_disconnect_edges;
