mod conversation_window_test;
