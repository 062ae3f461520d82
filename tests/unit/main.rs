mod test_use_cases;
