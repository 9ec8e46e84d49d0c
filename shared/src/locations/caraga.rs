//! Bundled Caraga (Region XIII) location data.

use super::RawRegion;

#[rustfmt::skip]
pub(super) const CARAGA: &[RawRegion] = &[
    ("Caraga (Region XIII)", &[
        ("Agusan del Norte", &[
            ("Butuan City", &[
                "Anticala", "Baan", "Bancasi", "Banza", "Barangay 1", "Barangay 2",
                "Barangay 3", "Bit-os", "Bonbon", "Buhangin", "Camayahan", "Dagohoy",
                "Dumalagan", "Florida", "Golden Ribbon", "Holy Redeemer", "Humabon", "Imadejas",
                "Kinamlutan", "Lapu-lapu", "Libertad", "Limaha", "Los Angeles", "Mahogany",
                "Maon", "Masao", "New Society Village", "Pangabugan", "Port Puyod",
                "San Ignacio", "San Mateo", "Santiago", "Sikatuna", "Sumile", "Taguibo",
                "Tiniwisan", "Villa Kananga",
            ]),
            ("Nasipit", &[
                "Cahayagan", "Taguibo", "Poblacion", "Camagong", "Cantugas", "Dayawan",
                "San Roque", "Tagbuyawan",
            ]),
            ("Las Nieves", &[
                "Poblacion", "San Roque", "Santo Rosario", "Ambago", "Anislagan", "Aurora",
                "Golden Valley", "Magkalungay", "San Jose", "San Vicente", "Tagbuyawan",
            ]),
            ("Magallanes", &[
                "Poblacion", "Tagbuyawan", "Magsaysay", "Anislagan", "Bunawan", "Doña Flavia",
                "San Isidro", "San Jose", "Tagbina", "Upper Olave",
            ]),
            ("Santiago", &[
                "Poblacion", "Mabuhay", "San Antonio", "Santa Ana", "Tagbubunga", "Tagbina",
                "Upper Olave",
            ]),
            ("Tubay", &[
                "Poblacion", "Tag-olo", "San Vicente", "San Roque", "Tagbina",
            ]),
            ("Carmen", &[
                "Poblacion", "Cahayag", "Gosoon", "Tagbuyawan", "Upper Olave",
            ]),
            ("Jabonga", &[
                "Poblacion", "Caasinan", "Magkalungay", "San Vicente", "Tagbina",
            ]),
            ("Kitcharao", &[
                "Poblacion", "Anahawan", "Hinimbangan", "Magsaysay", "San Isidro",
            ]),
            ("Remedios T. Romualdez", &[
                "Poblacion", "Cagdianao", "Dayawan", "Magsaysay", "Tagbina",
            ]),
            ("Buenavista", &[
                "Poblacion", "Liberty", "Mahaba", "San Roque", "Tagbina",
            ]),
            ("Cabadbaran City", &[
                "Barangay 1", "Barangay 2", "Barangay 3", "Barangay 4", "Barangay 5",
                "Barangay 6", "Barangay 7", "Barangay 8", "Barangay 9", "Barangay 10",
                "Poblacion", "New Pandan", "Bay-ang", "Bayabas", "Caasinan",
            ]),
        ]),
        ("Agusan del Sur", &[
            ("Prosperidad", &[
                "Poblacion", "San Teodoro", "Villa Mercedes", "Bayugan", "Esperanza", "Gomez",
                "Kasapa", "La Paz", "Libertad", "Mahagsay", "San Agustin", "San Andres",
                "San Antonio", "San Jose", "San Roque", "Santa Ana", "Villa Aurora",
            ]),
            ("San Francisco", &[
                "Poblacion", "Alegria", "Ebro", "Bayugan", "Esperanza", "Gomez", "Kasapa",
                "La Paz", "Libertad", "Mahagsay", "San Agustin", "San Andres", "San Antonio",
                "San Jose", "San Roque", "Santa Ana", "Villa Aurora",
            ]),
            ("Trento", &[
                "Poblacion", "Mat-i", "Mahagsay", "Bayugan", "Esperanza", "Gomez", "Kasapa",
                "La Paz", "Libertad", "San Agustin", "San Andres", "San Antonio", "San Jose",
                "San Roque", "Santa Ana", "Villa Aurora",
            ]),
            ("Bunawan", &[
                "Poblacion", "Consuelo", "Libertad", "Bayugan", "Esperanza", "Gomez", "Kasapa",
                "La Paz", "Mahagsay", "San Agustin", "San Andres", "San Antonio", "San Jose",
                "San Roque", "Santa Ana", "Villa Aurora",
            ]),
            ("Bayugan City", &[
                "Poblacion 1", "Poblacion 2", "Poblacion 3", "Poblacion 4", "Poblacion 5",
                "Poblacion 6", "Poblacion 7", "Poblacion 8", "Poblacion 9", "Poblacion 10",
                "Anahaw", "Aurora", "Bobonawan", "Bucac", "Bugac", "Joy", "Katipunan",
                "Maygatasan", "Monteclaro", "Sagua", "Santo Rosario", "Taglatawan", "Titik",
                "Villa Undayon", "Wawa",
            ]),
            ("Esperanza", &[
                "Poblacion", "Bayugan", "Gomez", "Kasapa", "La Paz", "Libertad", "Mahagsay",
                "San Agustin", "San Andres", "San Antonio", "San Jose", "San Roque",
                "Santa Ana", "Villa Aurora",
            ]),
            ("La Paz", &[
                "Poblacion", "Bayugan", "Esperanza", "Gomez", "Kasapa", "Libertad", "Mahagsay",
                "San Agustin", "San Andres", "San Antonio", "San Jose", "San Roque",
                "Santa Ana", "Villa Aurora",
            ]),
            ("Loreto", &[
                "Poblacion", "Bayugan", "Esperanza", "Gomez", "Kasapa", "La Paz", "Libertad",
                "Mahagsay", "San Agustin", "San Andres", "San Antonio", "San Jose", "San Roque",
                "Santa Ana", "Villa Aurora",
            ]),
            ("Rosario", &[
                "Poblacion", "Bayugan", "Esperanza", "Gomez", "Kasapa", "La Paz", "Libertad",
                "Mahagsay", "San Agustin", "San Andres", "San Antonio", "San Jose", "San Roque",
                "Santa Ana", "Villa Aurora",
            ]),
            ("San Luis", &[
                "Poblacion", "Bayugan", "Esperanza", "Gomez", "Kasapa", "La Paz", "Libertad",
                "Mahagsay", "San Agustin", "San Andres", "San Antonio", "San Jose", "San Roque",
                "Santa Ana", "Villa Aurora",
            ]),
            ("Santa Josefa", &[
                "Poblacion", "Bayugan", "Esperanza", "Gomez", "Kasapa", "La Paz", "Libertad",
                "Mahagsay", "San Agustin", "San Andres", "San Antonio", "San Jose", "San Roque",
                "Santa Ana", "Villa Aurora",
            ]),
            ("Sibagat", &[
                "Poblacion", "Bayugan", "Esperanza", "Gomez", "Kasapa", "La Paz", "Libertad",
                "Mahagsay", "San Agustin", "San Andres", "San Antonio", "San Jose", "San Roque",
                "Santa Ana", "Villa Aurora",
            ]),
            ("Talacogon", &[
                "Poblacion", "Bayugan", "Esperanza", "Gomez", "Kasapa", "La Paz", "Libertad",
                "Mahagsay", "San Agustin", "San Andres", "San Antonio", "San Jose", "San Roque",
                "Santa Ana", "Villa Aurora",
            ]),
            ("Veruela", &[
                "Poblacion", "Bayugan", "Esperanza", "Gomez", "Kasapa", "La Paz", "Libertad",
                "Mahagsay", "San Agustin", "San Andres", "San Antonio", "San Jose", "San Roque",
                "Santa Ana", "Villa Aurora",
            ]),
        ]),
        ("Surigao del Norte", &[
            ("Surigao City", &[
                "Canlanipa", "Ipil", "Mabua", "Poblacion 1", "Poblacion 2", "Poblacion 3",
                "Poblacion 4", "Poblacion 5", "Poblacion 6", "Poblacion 7", "Poblacion 8",
                "Alang-alang", "Anomar", "Buenavista", "Cabongbongan", "Capalawan", "Danawan",
                "Lipata", "Lisondra", "Luna", "Mapawa", "Orok", "Poctoy", "Punta Bilar",
                "San Juan", "San Roque", "Serna", "Songkoy", "Taft", "Togbongon", "Trinidad",
                "Washington",
            ]),
            ("Alegria", &[
                "Poblacion", "Budlingin", "Magsaysay", "Alang-alang", "Anomar", "Buenavista",
                "Cabongbongan", "Capalawan", "Danawan", "Lipata", "Lisondra", "Luna", "Mapawa",
                "Orok", "Poctoy",
            ]),
            ("Placer", &[
                "Poblacion", "Esperanza", "Ipil", "Alang-alang", "Anomar", "Buenavista",
                "Cabongbongan", "Capalawan", "Danawan", "Lipata", "Lisondra", "Luna", "Mapawa",
                "Orok",
            ]),
            ("Dapa", &[
                "Poblacion", "Caub", "San Isidro", "Alang-alang", "Anomar", "Buenavista",
                "Cabongbongan", "Capalawan", "Danawan", "Lipata",
            ]),
            ("General Luna", &[
                "Poblacion", "Catangnan", "Doot", "San Isidro", "Union",
            ]),
            ("Pilar", &[
                "Poblacion", "Esperanza", "San Roque",
            ]),
            ("San Benito", &[
                "Poblacion", "Hanagdong", "Lahi",
            ]),
            ("San Francisco", &[
                "Poblacion", "Anomar", "Capalawan",
            ]),
            ("San Isidro", &[
                "Poblacion", "Danhawan", "Esperanza",
            ]),
            ("Santa Monica", &[
                "Poblacion", "Buenavista", "Hanagdong",
            ]),
            ("Sison", &[
                "Poblacion", "Anomar", "Capalawan",
            ]),
            ("Socorro", &[
                "Poblacion", "Navarro", "Rizal",
            ]),
            ("Tagana-an", &[
                "Poblacion", "Urbiztondo", "San Roque",
            ]),
            ("Tubod", &[
                "Poblacion", "Anomar", "Capalawan",
            ]),
            ("Bacuag", &[
                "Poblacion", "Bita", "Camangahan", "Canlapig", "Cubay",
            ]),
            ("Claver", &[
                "Poblacion", "Imbang", "Malinao", "San Carlos", "Banibaniahan",
            ]),
            ("Del Carmen", &[
                "Poblacion", "Binanga", "Bohayan", "Bogtukan", "Bugaon",
            ]),
            ("Gigaquit", &[
                "Poblacion", "Balangkas", "Baliwasan", "Balsanad", "Baluy",
            ]),
            ("Mainit", &[
                "Poblacion", "Balangbalang", "Balatayan", "Balikatbayan", "Baliling",
            ]),
            ("Malimono", &[
                "Poblacion", "Balite", "Langbit", "Magpapit", "Maligaya",
            ]),
        ]),
        ("Surigao del Sur", &[
            ("Tandag City", &[
                "Poblacion", "Bongtud", "Telaje", "Awasian", "Buenavista", "Dagocdoc", "Libas",
                "Mabua", "Pandanon", "San Agustin I", "San Agustin II", "San Antonio",
                "San Isidro", "San Roque", "Sindaton",
            ]),
            ("Bislig City", &[
                "Poblacion", "Mangagoy", "San Fernando", "San Vicente", "Adlay", "Coleto",
                "Fortaliza", "Lawigan", "Pamaypayan", "San Isidro", "Sibaroy", "Tabon",
                "Villa Paz",
            ]),
            ("Bayabas", &[
                "Poblacion", "Mahayahay", "New Tubigon", "Amaga", "Daku", "Kahayag",
            ]),
            ("Cagwait", &[
                "Poblacion", "Amaga", "Daku", "Kahayag", "Kapatagan", "Lanuza",
            ]),
            ("Cantilan", &[
                "Poblacion", "Amaga", "Daku", "Kahayag", "Kapatagan", "Lanuza",
            ]),
            ("Carmen", &[
                "Poblacion", "Amaga", "Daku", "Kahayag", "Kapatagan", "Lanuza",
            ]),
            ("Carrascal", &[
                "Poblacion", "Amaga", "Daku", "Kahayag", "Kapatagan", "Lanuza",
            ]),
            ("Cortes", &[
                "Poblacion", "Amaga", "Daku", "Kahayag", "Kapatagan", "Lanuza",
            ]),
            ("Hinatuan", &[
                "Poblacion", "Amaga", "Daku", "Kahayag", "Kapatagan", "Lanuza",
            ]),
            ("Lanuza", &[
                "Poblacion", "Amaga", "Daku", "Kahayag", "Kapatagan", "San Roque",
            ]),
            ("Lianga", &[
                "Poblacion", "Amaga", "Daku", "Kahayag", "Kapatagan", "Lanuza",
            ]),
            ("Lingig", &[
                "Poblacion", "Amaga", "Daku", "Kahayag", "Kapatagan", "Lanuza",
            ]),
            ("Madrid", &[
                "Poblacion", "Amaga", "Daku", "Kahayag", "Kapatagan", "Lanuza",
            ]),
            ("Marihatag", &[
                "Poblacion", "Amaga", "Daku", "Kahayag", "Kapatagan", "Lanuza",
            ]),
            ("San Agustin", &[
                "Poblacion", "Amaga", "Daku", "Kahayag", "Kapatagan", "Lanuza",
            ]),
            ("San Miguel", &[
                "Poblacion", "Amaga", "Daku", "Kahayag", "Kapatagan", "Lanuza",
            ]),
            ("Tagbina", &[
                "Poblacion", "Amaga", "Daku", "Kahayag", "Kapatagan", "Lanuza",
            ]),
            ("Tago", &[
                "Poblacion", "Amaga", "Daku", "Kahayag", "Kapatagan", "Lanuza",
            ]),
        ]),
        ("Dinagat Islands", &[
            ("San Jose", &[
                "Poblacion", "Santa Cruz", "Aurelio", "Boa", "Don Ruben E. Ecleo Sr.",
                "Justiniana Edera", "Lake Bababu", "Mabini", "San Juan", "San Pedro",
                "Santa Rita", "Villa San Antonio",
            ]),
            ("Basilisa", &[
                "Poblacion", "Santa Rita", "Benglen", "Boa", "Don Ruben E. Ecleo Sr.",
                "Justiniana Edera", "Lake Bababu", "Mabini", "San Juan", "San Pedro",
                "Santa Cruz", "Villa San Antonio",
            ]),
            ("Cagdianao", &[
                "Poblacion", "Villa Real", "New Mainit", "Boa", "Don Ruben E. Ecleo Sr.",
                "Justiniana Edera", "Lake Bababu", "Mabini", "San Juan", "San Pedro",
                "Santa Cruz", "Santa Rita", "Villa San Antonio",
            ]),
            ("Dinagat", &[
                "Poblacion", "San Juan", "Ecija", "Boa", "Don Ruben E. Ecleo Sr.",
                "Justiniana Edera", "Lake Bababu", "Mabini", "San Pedro", "Santa Cruz",
                "Santa Rita", "Villa San Antonio",
            ]),
            ("Libjo", &[
                "Poblacion", "Boa", "Don Ruben E. Ecleo Sr.", "Justiniana Edera", "Lake Bababu",
                "Mabini", "San Juan", "San Pedro", "Santa Cruz", "Santa Rita",
                "Villa San Antonio",
            ]),
            ("Loreto", &[
                "Poblacion", "Boa", "Don Ruben E. Ecleo Sr.", "Justiniana Edera", "Lake Bababu",
                "Mabini", "San Juan", "San Pedro", "Santa Cruz", "Santa Rita",
                "Villa San Antonio",
            ]),
            ("Tubajon", &[
                "Poblacion", "Boa", "Don Ruben E. Ecleo Sr.", "Justiniana Edera", "Lake Bababu",
                "Mabini", "San Juan", "San Pedro", "Santa Cruz", "Santa Rita",
                "Villa San Antonio",
            ]),
        ]),
    ]),
];
