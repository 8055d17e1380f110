mod build_sequence_contract;
