mod test_send_requires_connection;
