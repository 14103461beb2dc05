use rand::SeedableRng;
use rand::rngs::StdRng;

use tweet_gen_core::ChainError;
use tweet_gen_core::io::read_column_from_reader;
use tweet_gen_core::model::{ChainSampler, SamplerConfig, SuccessorWeighting};
use tweet_gen_core::tokenize::tokenize;

const CORPUS: &str = "id,content\n\
	1,\"We will WIN!\"\n\
	2,\"We will build.\"\n\
	3,\"\"\n";

fn trained(weighting: SuccessorWeighting) -> ChainSampler {
	let texts = read_column_from_reader(CORPUS.as_bytes(), "content", b',').unwrap();
	let documents: Vec<Vec<String>> = texts.iter().map(|text| tokenize(text)).collect();

	let config = SamplerConfig::default().with_weighting(weighting);
	let mut sampler = ChainSampler::new(config);
	sampler.train(&documents).unwrap();
	sampler
}

#[test]
fn corpus_to_table() {
	let sampler = trained(SuccessorWeighting::Frequency);
	let table = sampler.table();

	let words: Vec<&str> = table.all_entries().map(|entry| entry.word()).collect();
	assert_eq!(words, vec!["we will", "win !", "build ."]);
	assert_eq!(table.total_starts(), 2);

	let start = table.get_entry("we will").unwrap();
	assert_eq!(start.start_count(), 2);
	assert_eq!(start.total_successor_mass(), 2);
	assert_eq!(table.get_entry("win !").unwrap().end_count(), 1);
}

#[test]
fn frequency_sentences_come_from_the_corpus() {
	let sampler = trained(SuccessorWeighting::Frequency);
	let mut rng = StdRng::seed_from_u64(7);
	for _ in 0..50 {
		let sentence = sampler.generate(&mut rng).unwrap();
		assert!(
			sentence == "we will win !" || sentence == "we will build .",
			"unexpected sentence {sentence:?}"
		);
	}
}

#[test]
fn index_mode_can_stop_after_the_start() {
	let sampler = trained(SuccessorWeighting::Index);
	let mut rng = StdRng::seed_from_u64(7);
	for _ in 0..50 {
		let sentence = sampler.generate(&mut rng).unwrap();
		assert!(
			["we will", "we will win !", "we will build ."].contains(&sentence.as_str()),
			"unexpected sentence {sentence:?}"
		);
	}
}

#[test]
fn same_seed_same_sentence() {
	let sampler = trained(SuccessorWeighting::Frequency);
	let first = sampler.generate(&mut StdRng::seed_from_u64(42)).unwrap();
	let second = sampler.generate(&mut StdRng::seed_from_u64(42)).unwrap();
	assert_eq!(first, second);
}

#[test]
fn header_only_corpus_is_empty() {
	let texts = read_column_from_reader("content\n".as_bytes(), "content", b',').unwrap();
	let documents: Vec<Vec<String>> = texts.iter().map(|text| tokenize(text)).collect();

	let mut sampler = ChainSampler::default();
	sampler.train(&documents).unwrap();
	assert!(matches!(sampler.generate_with_thread_rng(), Err(ChainError::EmptyModel)));
}
