// src/services/association.rs

// Monta o grafo de escrita de uma fazenda a partir do payload.
// O payload descreve a relação cultura -> safra "ao contrário": cada safra lista
// os nomes das culturas que lhe pertencem. Aqui isso vira a chave na cultura.

use crate::models::{
    crop::{CropInput, NewCrop},
    farm::{FarmInput, NewFarm},
    harvest::{HarvestInput, NewHarvest},
};

/// Converte o payload em `NewFarm`, descartando ids do cliente e a lista de nomes das safras.
pub fn build_new_farm(input: FarmInput) -> NewFarm {
    let crops = input.crops.unwrap_or_default();
    let harvests = input.harvests.unwrap_or_default();

    let links = link_crops_to_harvests(&crops, &harvests);

    let crops = crops
        .into_iter()
        .zip(links)
        .map(|(crop, harvest)| NewCrop { name: crop.name, year: crop.year, harvest })
        .collect();

    let harvests = harvests.into_iter().map(|h| NewHarvest { year: h.year }).collect();

    NewFarm {
        name: input.name,
        city: input.city,
        state: input.state,
        total_area: input.total_area,
        arable_area: input.arable_area,
        vegetation_area: input.vegetation_area,
        harvests,
        crops,
    }
}

/// Para cada cultura, o índice da safra que a reivindica pelo nome.
/// Se mais de uma safra listar o mesmo nome, vence a última processada.
pub fn link_crops_to_harvests(crops: &[CropInput], harvests: &[HarvestInput]) -> Vec<Option<usize>> {
    let mut links = vec![None; crops.len()];

    for (harvest_index, harvest) in harvests.iter().enumerate() {
        for (crop_index, crop) in crops.iter().enumerate() {
            if harvest.crops.iter().any(|c| c.name == crop.name) {
                links[crop_index] = Some(harvest_index);
            }
        }
    }

    links
}
