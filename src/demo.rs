use crate::blockchain::{Blockchain, PowError, SearchLimits};

/// Build a three-block chain, print it and print a single verdict line.
pub fn run(limits: SearchLimits) -> Result<(), PowError> {
    let chain = build_chain(limits)?;
    for block in chain.blocks() {
        println!("{block}");
    }
    println!("{}", verdict(&chain));
    Ok(())
}

fn build_chain(limits: SearchLimits) -> Result<Blockchain, PowError> {
    let mut chain = Blockchain::with_limits(limits);

    chain.initiate_transaction("Joe", "Karter", "5 BTC");
    chain.initiate_transaction("Harry", "Porter", "6 BTC");
    chain.mine_next_block()?;

    chain.initiate_transaction("Sammy", "Roger", "2 BTC");
    chain.initiate_transaction("Stella", "Coxy", "19 BTC");
    chain.initiate_transaction("Logan", "Alex", "23 BTC");
    chain.mine_next_block()?;

    Ok(chain)
}

fn verdict(chain: &Blockchain) -> String {
    if chain.is_chain_valid() {
        "Block chain is valid!".to_string()
    } else {
        let report = chain.validate();
        let blocks: Vec<String> = report
            .tampered_indices()
            .iter()
            .map(|i| i.to_string())
            .collect();
        format!("Block chain tampered! (blocks: {})", blocks.join(", "))
    }
}
