mod batch_repository_tests;
