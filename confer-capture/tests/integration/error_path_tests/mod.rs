mod test_unavailable_store;
