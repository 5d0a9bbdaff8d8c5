mod selection_set_tests;
