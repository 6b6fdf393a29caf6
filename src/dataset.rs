//! Built-in dataset: the first 28 Pokédex entries.

use crate::types::{Column, ColumnKind, Dataset};

const POKEDEX: [[&str; 6]; 28] = [
    ["1", "Bulbasaur", "Grass", "Poison", "フシギダネ", "Bulbasaur"],
    ["2", "Ivysaur", "Grass", "Poison", "フシギソウ", "Ivysaur"],
    ["3", "Venusaur", "Grass", "Poison", "フシギバナ", "Venusaur"],
    ["4", "Charmander", "Fire", "", "ヒトカゲ", "Hitokage"],
    ["5", "Charmeleon", "Fire", "", "リザード", "Lizardo"],
    ["6", "Charizard", "Fire", "Flying", "リザードン", "Lizardon"],
    ["7", "Squirtle", "Water", "", "ゼニガメ", "Zenigame"],
    ["8", "Wartortle", "Water", "", "カメール", "Kameil"],
    ["9", "Blastoise", "Water", "", "カメックス", "Kamex"],
    ["10", "Caterpie", "Bug", "", "キャタピー", "Caterpie"],
    ["11", "Metapod", "Bug", "", "トランセル", "Trancell"],
    ["12", "Butterfree", "Bug", "Flying", "バタフリー", "Butterfree"],
    ["13", "Weedle", "Bug", "Poison", "ビードル", "Beedle"],
    ["14", "Kakuna", "Bug", "Poison", "コクーン", "Cocoon"],
    ["15", "Beedrill", "Bug", "Poison", "スピアー", "Spear"],
    ["16", "Pidgey", "Normal", "Flying", "ポッポ", "Poppo"],
    ["17", "Pidgeotto", "Normal", "Flying", "ピジョン", "Pigeon"],
    ["18", "Pidgeot", "Normal", "Flying", "ピジョット", "Pigeot"],
    ["19", "Rattata", "Normal", "", "コラッタ", "Koratta"],
    ["20", "Raticate", "Normal", "", "ラッタ", "Ratta"],
    ["21", "Spearow", "Normal", "Flying", "オニスズメ", "Onisuzume"],
    ["22", "Fearow", "Normal", "Flying", "オニドリル", "Onidrill"],
    ["23", "Ekans", "Poison", "", "アーボ", "Arbo"],
    ["24", "Arbok", "Poison", "", "アーボック", "Arbok"],
    ["25", "Pikachu", "Electric", "", "ピカチュウ", "Pikachu"],
    ["26", "Raichu", "Electric", "", "ライチュウ", "Raichu"],
    ["27", "Sandshrew", "Ground", "", "サンド", "Sand"],
    ["28", "Sandslash", "Ground", "", "サンドパン", "Sandpan"],
];

/// Schema shared by every Pokédex-shaped dataset.
pub fn pokedex_columns() -> Vec<Column> {
    vec![
        Column::new("#", ColumnKind::Numeric),
        Column::new("Name", ColumnKind::Text),
        Column::new("Type 1", ColumnKind::Categorical),
        Column::new("Type 2", ColumnKind::Categorical),
        Column::new("Japanese", ColumnKind::Text),
        Column::new("Official Rom.", ColumnKind::Text),
    ]
}

pub fn pokedex() -> Dataset {
    Dataset::from_raw(pokedex_columns(), POKEDEX)
}
