mod from_record_tests;
