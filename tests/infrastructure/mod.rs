mod synthesis;
