mod collection;
