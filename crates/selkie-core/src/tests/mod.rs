mod serialize;
