//! CIE 1931 2 degree standard observer at 1 nm, 360 nm to 830 nm.
//!
//! Rows are `[x̄, ȳ, z̄]` starting at 360 nm.

/// Number of rows in [`CIE_1931_2_DEGREE_DATA`].
pub const CIE_1931_2_DEGREE_LEN: usize = 471;

/// Colour matching function values of the CIE 1931 2 degree standard observer.
#[rustfmt::skip]
pub static CIE_1931_2_DEGREE_DATA: [[f64; 3]; CIE_1931_2_DEGREE_LEN] = [
    [0.0001299, 0.000003917, 0.0006061], // 360
    [0.000145847, 0.000004393581, 0.0006808792], // 361
    [0.0001638021, 0.000004929604, 0.0007651456], // 362
    [0.0001840037, 0.000005532136, 0.0008600124], // 363
    [0.0002066902, 0.000006208245, 0.0009665928], // 364
    [0.0002321, 0.000006965, 0.001086], // 365
    [0.000260728, 0.000007813219, 0.001220586], // 366
    [0.000293075, 0.000008767336, 0.001372729], // 367
    [0.000329388, 0.000009839844, 0.001543579], // 368
    [0.000369914, 0.00001104323, 0.001734286], // 369
    [0.0004149, 0.00001239, 0.001946], // 370
    [0.0004641587, 0.00001388641, 0.002177777], // 371
    [0.000518986, 0.00001555728, 0.002435809], // 372
    [0.000581854, 0.00001744296, 0.002731953], // 373
    [0.0006552347, 0.00001958375, 0.003078064], // 374
    [0.0007416, 0.00002202, 0.003486], // 375
    [0.0008450296, 0.00002483965, 0.003975227], // 376
    [0.0009645268, 0.00002804126, 0.00454088], // 377
    [0.001094949, 0.00003153104, 0.00515832], // 378
    [0.001231154, 0.00003521521, 0.005802907], // 379
    [0.001368, 0.000039, 0.006450001], // 380
    [0.00150205, 0.0000428264, 0.007083216], // 381
    [0.001642328, 0.0000469146, 0.007745488], // 382
    [0.001802382, 0.0000515896, 0.008501152], // 383
    [0.001995757, 0.0000571764, 0.009414544], // 384
    [0.002236, 0.000064, 0.01054999], // 385
    [0.002535385, 0.00007234421, 0.0119658], // 386
    [0.002892603, 0.00008221224, 0.01365587], // 387
    [0.003300829, 0.00009350816, 0.01558805], // 388
    [0.003753236, 0.0001061361, 0.01773015], // 389
    [0.004243, 0.00012, 0.02005001], // 390
    [0.004762389, 0.000134984, 0.02251136], // 391
    [0.005330048, 0.000151492, 0.02520288], // 392
    [0.005978712, 0.000170208, 0.02827972], // 393
    [0.006741117, 0.000191816, 0.03189704], // 394
    [0.00765, 0.000217, 0.03621], // 395
    [0.008751373, 0.0002469067, 0.04143771], // 396
    [0.01002888, 0.00028124, 0.04750372], // 397
    [0.0114217, 0.00031852, 0.05411988], // 398
    [0.01286901, 0.0003572667, 0.06099803], // 399
    [0.01431, 0.000396, 0.06785001], // 400
    [0.01570443, 0.0004337147, 0.07448632], // 401
    [0.01714744, 0.000473024, 0.08136156], // 402
    [0.01878122, 0.000517876, 0.08915364], // 403
    [0.02074801, 0.0005722187, 0.09854048], // 404
    [0.02319, 0.00064, 0.1102], // 405
    [0.02620736, 0.00072456, 0.1246133], // 406
    [0.02978248, 0.0008255, 0.1417017], // 407
    [0.03388092, 0.00094116, 0.1613035], // 408
    [0.03846824, 0.00106988, 0.1832568], // 409
    [0.04351, 0.00121, 0.2074], // 410
    [0.0489956, 0.001362091, 0.2336921], // 411
    [0.0550226, 0.001530752, 0.2626114], // 412
    [0.0617188, 0.001720368, 0.2947746], // 413
    [0.069212, 0.001935323, 0.3307985], // 414
    [0.07763, 0.00218, 0.3713], // 415
    [0.08695811, 0.0024548, 0.4162091], // 416
    [0.09717672, 0.002764, 0.4654642], // 417
    [0.1084063, 0.0031178, 0.5196948], // 418
    [0.1207672, 0.0035264, 0.5795303], // 419
    [0.13438, 0.004, 0.6456], // 420
    [0.1493582, 0.00454624, 0.7184838], // 421
    [0.1653957, 0.00515932, 0.7967133], // 422
    [0.1819831, 0.00582928, 0.8778459], // 423
    [0.198611, 0.00654616, 0.959439], // 424
    [0.21477, 0.0073, 1.0390501], // 425
    [0.2301868, 0.008086507, 1.115367], // 426
    [0.2448797, 0.00890872, 1.188497], // 427
    [0.2587773, 0.00976768, 1.258123], // 428
    [0.2718079, 0.01066443, 1.32393], // 429
    [0.2839, 0.0116, 1.3856], // 430
    [0.2949438, 0.01257317, 1.442635], // 431
    [0.3048965, 0.01358272, 1.494803], // 432
    [0.3137873, 0.01462968, 1.54219], // 433
    [0.3216454, 0.01571509, 1.584881], // 434
    [0.3285, 0.01684, 1.62296], // 435
    [0.3343513, 0.01800736, 1.656405], // 436
    [0.3392101, 0.01921448, 1.685296], // 437
    [0.3431213, 0.02045392, 1.709874], // 438
    [0.3461296, 0.02171824, 1.730382], // 439
    [0.34828, 0.023, 1.74706], // 440
    [0.3495999, 0.02429461, 1.760045], // 441
    [0.3501474, 0.02561024, 1.769623], // 442
    [0.350013, 0.02695857, 1.776264], // 443
    [0.349287, 0.02835125, 1.780433], // 444
    [0.34806, 0.0298, 1.7826], // 445
    [0.3463733, 0.03131083, 1.782968], // 446
    [0.3442624, 0.03288368, 1.7817], // 447
    [0.3418088, 0.03452112, 1.779198], // 448
    [0.3390941, 0.03622571, 1.775867], // 449
    [0.3362, 0.038, 1.77211], // 450
    [0.3331977, 0.03984667, 1.768259], // 451
    [0.3300411, 0.041768, 1.764039], // 452
    [0.3266357, 0.043766, 1.758944], // 453
    [0.3228868, 0.04584267, 1.752466], // 454
    [0.3187, 0.048, 1.7441], // 455
    [0.3140251, 0.05024368, 1.73356], // 456
    [0.308884, 0.05257304, 1.720858], // 457
    [0.3032904, 0.05498056, 1.705937], // 458
    [0.2972579, 0.05745872, 1.688737], // 459
    [0.2908, 0.06, 1.6692], // 460
    [0.2839701, 0.06260197, 1.647529], // 461
    [0.2767214, 0.06527752, 1.623413], // 462
    [0.2689178, 0.06804208, 1.596022], // 463
    [0.2604227, 0.07091109, 1.564528], // 464
    [0.2511, 0.0739, 1.5281], // 465
    [0.2408475, 0.077016, 1.486111], // 466
    [0.2298512, 0.0802664, 1.439521], // 467
    [0.2184072, 0.0836668, 1.38988], // 468
    [0.2068115, 0.0872328, 1.338736], // 469
    [0.19536, 0.09098, 1.28764], // 470
    [0.1842136, 0.09491755, 1.237422], // 471
    [0.1733273, 0.09904584, 1.187824], // 472
    [0.1626881, 0.1033674, 1.138761], // 473
    [0.1522833, 0.1078846, 1.090148], // 474
    [0.1421, 0.1126, 1.0419], // 475
    [0.1321786, 0.117532, 0.9941976], // 476
    [0.1225696, 0.1226744, 0.9473473], // 477
    [0.1132752, 0.1279928, 0.9014531], // 478
    [0.1042979, 0.1334528, 0.8566193], // 479
    [0.09564, 0.13902, 0.8129501], // 480
    [0.08729955, 0.1446764, 0.7705173], // 481
    [0.07930804, 0.1504693, 0.7294448], // 482
    [0.07171776, 0.1564619, 0.6899136], // 483
    [0.06458002, 0.1627177, 0.6521049], // 484
    [0.05795001, 0.1693, 0.6162], // 485
    [0.05186211, 0.1762431, 0.5823286], // 486
    [0.04628152, 0.1835581, 0.5504162], // 487
    [0.04115088, 0.1912735, 0.5203376], // 488
    [0.03641283, 0.199418, 0.4919673], // 489
    [0.03201, 0.20802, 0.46518], // 490
    [0.0279172, 0.2171199, 0.4399246], // 491
    [0.0241444, 0.2267345, 0.4161836], // 492
    [0.020687, 0.2368571, 0.3938822], // 493
    [0.0175404, 0.2474812, 0.3729459], // 494
    [0.0147, 0.2586, 0.3533], // 495
    [0.01216179, 0.2701849, 0.3348578], // 496
    [0.00991996, 0.2822939, 0.3175521], // 497
    [0.00796724, 0.2950505, 0.3013375], // 498
    [0.006296346, 0.308578, 0.2861686], // 499
    [0.0049, 0.323, 0.272], // 500
    [0.003777173, 0.3384021, 0.2588171], // 501
    [0.00294532, 0.3546858, 0.2464838], // 502
    [0.00242488, 0.3716986, 0.2347718], // 503
    [0.002236293, 0.3892875, 0.2234533], // 504
    [0.0024, 0.4073, 0.2123], // 505
    [0.00292552, 0.4256299, 0.2011692], // 506
    [0.00383656, 0.4443096, 0.1901196], // 507
    [0.00517484, 0.4633944, 0.1792254], // 508
    [0.00698208, 0.4829395, 0.1685608], // 509
    [0.0093, 0.503, 0.1582], // 510
    [0.01214949, 0.5235693, 0.1481383], // 511
    [0.01553588, 0.544512, 0.1383758], // 512
    [0.01947752, 0.56569, 0.1289942], // 513
    [0.02399277, 0.5869653, 0.1200751], // 514
    [0.0291, 0.6082, 0.1117], // 515
    [0.03481485, 0.6293456, 0.1039048], // 516
    [0.04112016, 0.6503068, 0.09666748], // 517
    [0.04798504, 0.6708752, 0.08998272], // 518
    [0.05537861, 0.6908424, 0.08384531], // 519
    [0.06327, 0.71, 0.07824999], // 520
    [0.07163501, 0.7281852, 0.07320899], // 521
    [0.08046224, 0.7454636, 0.06867816], // 522
    [0.08973996, 0.7619694, 0.06456784], // 523
    [0.09945645, 0.7778368, 0.06078835], // 524
    [0.1096, 0.7932, 0.05725001], // 525
    [0.1201674, 0.8081104, 0.05390435], // 526
    [0.1311145, 0.8224962, 0.05074664], // 527
    [0.1423679, 0.8363068, 0.04775276], // 528
    [0.1538542, 0.8494916, 0.04489859], // 529
    [0.1655, 0.862, 0.04216], // 530
    [0.1772571, 0.8738108, 0.03950728], // 531
    [0.18914, 0.8849624, 0.03693564], // 532
    [0.2011694, 0.8954936, 0.03445836], // 533
    [0.2133658, 0.9054432, 0.03208872], // 534
    [0.2257499, 0.9148501, 0.02984], // 535
    [0.2383209, 0.9237348, 0.02771181], // 536
    [0.2510668, 0.9320924, 0.02569444], // 537
    [0.2639922, 0.9399226, 0.02378716], // 538
    [0.2771017, 0.9472252, 0.02198925], // 539
    [0.2904, 0.954, 0.0203], // 540
    [0.3038912, 0.9602561, 0.01871805], // 541
    [0.3175726, 0.9660074, 0.01724036], // 542
    [0.3314384, 0.9712606, 0.01586364], // 543
    [0.3454828, 0.9760225, 0.01458461], // 544
    [0.3597, 0.9803, 0.0134], // 545
    [0.3740839, 0.9840924, 0.01230723], // 546
    [0.3886396, 0.9874182, 0.01130188], // 547
    [0.4033784, 0.9903128, 0.01037792], // 548
    [0.4183115, 0.9928116, 0.009529306], // 549
    [0.4334499, 0.9949501, 0.008749999], // 550
    [0.4487953, 0.9967108, 0.0080352], // 551
    [0.464336, 0.9980983, 0.0073816], // 552
    [0.480064, 0.999112, 0.0067854], // 553
    [0.4959713, 0.9997482, 0.0062428], // 554
    [0.5120501, 1.0, 0.005749999], // 555
    [0.5282959, 0.9998567, 0.0053036], // 556
    [0.5446916, 0.9993046, 0.0048998], // 557
    [0.5612094, 0.9983255, 0.0045342], // 558
    [0.5778215, 0.9968987, 0.0042024], // 559
    [0.5945, 0.995, 0.0039], // 560
    [0.6112209, 0.9926005, 0.0036232], // 561
    [0.6279758, 0.9897426, 0.0033706], // 562
    [0.6447602, 0.9864444, 0.0031414], // 563
    [0.6615697, 0.9827241, 0.0029348], // 564
    [0.6784, 0.9786, 0.002749999], // 565
    [0.6952392, 0.9740837, 0.0025852], // 566
    [0.7120586, 0.9691712, 0.0024386], // 567
    [0.7288284, 0.9638568, 0.0023094], // 568
    [0.7455188, 0.9581349, 0.0021968], // 569
    [0.7621, 0.952, 0.0021], // 570
    [0.7785432, 0.9454504, 0.002017733], // 571
    [0.7948256, 0.9384992, 0.0019482], // 572
    [0.8109264, 0.9311628, 0.0018898], // 573
    [0.8268248, 0.9234576, 0.001840933], // 574
    [0.8425, 0.9154, 0.0018], // 575
    [0.8579325, 0.9070064, 0.001766267], // 576
    [0.8730816, 0.8982772, 0.0017378], // 577
    [0.8878944, 0.8892048, 0.0017112], // 578
    [0.9023181, 0.8797816, 0.001683067], // 579
    [0.9163, 0.87, 0.001650001], // 580
    [0.9297995, 0.8598613, 0.001610133], // 581
    [0.9427984, 0.849392, 0.0015644], // 582
    [0.9552776, 0.838622, 0.0015136], // 583
    [0.9672179, 0.8275813, 0.001458533], // 584
    [0.9786, 0.8163, 0.0014], // 585
    [0.9893856, 0.8047947, 0.001336667], // 586
    [0.9995488, 0.793082, 0.00127], // 587
    [1.0090892, 0.781192, 0.001205], // 588
    [1.0180064, 0.7691547, 0.001146667], // 589
    [1.0263, 0.757, 0.0011], // 590
    [1.0339827, 0.7447541, 0.0010688], // 591
    [1.040986, 0.7324224, 0.0010494], // 592
    [1.047188, 0.7200036, 0.0010356], // 593
    [1.0524667, 0.7074965, 0.0010212], // 594
    [1.0567, 0.6949, 0.001], // 595
    [1.059794, 0.6822192, 0.00096864], // 596
    [1.061799, 0.6694716, 0.00092992], // 597
    [1.062806, 0.6566744, 0.00088688], // 598
    [1.062909, 0.6438448, 0.00084256], // 599
    [1.0622, 0.631, 0.0008], // 600
    [1.0607352, 0.6181555, 0.00076096], // 601
    [1.0584436, 0.6053144, 0.00072368], // 602
    [1.0552244, 0.5924756, 0.00068592], // 603
    [1.0509768, 0.5796379, 0.00064544], // 604
    [1.0456, 0.5668, 0.0006], // 605
    [1.0390369, 0.5539611, 0.0005478667], // 606
    [1.0313608, 0.5411372, 0.0004916], // 607
    [1.0226662, 0.5283528, 0.0004354], // 608
    [1.0130477, 0.5156323, 0.0003834667], // 609
    [1.0026, 0.503, 0.00034], // 610
    [0.9913675, 0.4904688, 0.0003072533], // 611
    [0.9793314, 0.4780304, 0.00028316], // 612
    [0.9664916, 0.4656776, 0.00026544], // 613
    [0.9528479, 0.4534032, 0.0002518133], // 614
    [0.9384, 0.4412, 0.00024], // 615
    [0.923194, 0.42908, 0.0002295467], // 616
    [0.907244, 0.417036, 0.00022064], // 617
    [0.890502, 0.405032, 0.00021196], // 618
    [0.87292, 0.393032, 0.0002021867], // 619
    [0.8544499, 0.381, 0.00019], // 620
    [0.835084, 0.3689184, 0.0001742133], // 621
    [0.814946, 0.3568272, 0.00015564], // 622
    [0.794186, 0.3447768, 0.00013596], // 623
    [0.772954, 0.3328176, 0.0001168533], // 624
    [0.7514, 0.321, 0.0001], // 625
    [0.7295836, 0.3093381, 0.00008613333], // 626
    [0.7075888, 0.2978504, 0.0000746], // 627
    [0.6856022, 0.2865936, 0.000065], // 628
    [0.6638104, 0.2756245, 0.00005693333], // 629
    [0.6424, 0.265, 0.00004999999], // 630
    [0.6215149, 0.2547632, 0.00004416], // 631
    [0.6011138, 0.2448896, 0.00003948], // 632
    [0.5811052, 0.2353344, 0.00003572], // 633
    [0.5613977, 0.2260528, 0.00003264], // 634
    [0.5419, 0.217, 0.00003], // 635
    [0.5225995, 0.2081616, 0.00002765333], // 636
    [0.5035464, 0.1995488, 0.00002556], // 637
    [0.4847436, 0.1911552, 0.00002364], // 638
    [0.4661941, 0.1829744, 0.00002181333], // 639
    [0.4479, 0.175, 0.00002], // 640
    [0.4298613, 0.1672235, 0.00001798667], // 641
    [0.412098, 0.1596464, 0.00001584], // 642
    [0.394644, 0.1522776, 0.00001368], // 643
    [0.3775333, 0.1451259, 0.00001162667], // 644
    [0.3608, 0.1382, 0.00001], // 645
    [0.3444563, 0.1315003, 0.000008], // 646
    [0.3285168, 0.1250248, 0.000006], // 647
    [0.3130192, 0.1187792, 0.000004], // 648
    [0.2980011, 0.1127691, 0.000002], // 649
    [0.2835, 0.107, 0.0], // 650
    [0.2695448, 0.1014762, 0.0], // 651
    [0.2561184, 0.09618864, 0.0], // 652
    [0.2431896, 0.09112296, 0.0], // 653
    [0.2307272, 0.08626485, 0.0], // 654
    [0.2187, 0.0816, 0.0], // 655
    [0.2070971, 0.07712064, 0.0], // 656
    [0.1959232, 0.07282552, 0.0], // 657
    [0.1851708, 0.06871008, 0.0], // 658
    [0.1748323, 0.06476976, 0.0], // 659
    [0.1649, 0.061, 0.0], // 660
    [0.1553667, 0.05739621, 0.0], // 661
    [0.14623, 0.05395504, 0.0], // 662
    [0.13749, 0.05067376, 0.0], // 663
    [0.1291467, 0.04754965, 0.0], // 664
    [0.1212, 0.04458, 0.0], // 665
    [0.1136397, 0.04175872, 0.0], // 666
    [0.106465, 0.03908496, 0.0], // 667
    [0.09969044, 0.03656384, 0.0], // 668
    [0.09333061, 0.03420048, 0.0], // 669
    [0.0874, 0.032, 0.0], // 670
    [0.08190096, 0.02996261, 0.0], // 671
    [0.07680428, 0.02807664, 0.0], // 672
    [0.07207712, 0.02632936, 0.0], // 673
    [0.06768664, 0.02470805, 0.0], // 674
    [0.0636, 0.0232, 0.0], // 675
    [0.05980685, 0.02180077, 0.0], // 676
    [0.05628216, 0.02050112, 0.0], // 677
    [0.05297104, 0.01928108, 0.0], // 678
    [0.04981861, 0.01812069, 0.0], // 679
    [0.04677, 0.017, 0.0], // 680
    [0.04378405, 0.01590379, 0.0], // 681
    [0.04087536, 0.01483718, 0.0], // 682
    [0.03807264, 0.01381068, 0.0], // 683
    [0.03540461, 0.01283478, 0.0], // 684
    [0.0329, 0.01192, 0.0], // 685
    [0.03056419, 0.01106831, 0.0], // 686
    [0.02838056, 0.01027339, 0.0], // 687
    [0.02634484, 0.009533311, 0.0], // 688
    [0.02445275, 0.008846157, 0.0], // 689
    [0.0227, 0.00821, 0.0], // 690
    [0.02108429, 0.007623781, 0.0], // 691
    [0.01959988, 0.007085424, 0.0], // 692
    [0.01823732, 0.006591476, 0.0], // 693
    [0.01698717, 0.006138485, 0.0], // 694
    [0.01584, 0.005723, 0.0], // 695
    [0.01479064, 0.005343059, 0.0], // 696
    [0.01383132, 0.004995796, 0.0], // 697
    [0.01294868, 0.004676404, 0.0], // 698
    [0.0121292, 0.004380075, 0.0], // 699
    [0.01135916, 0.004102, 0.0], // 700
    [0.01062935, 0.003838453, 0.0], // 701
    [0.009938846, 0.003589099, 0.0], // 702
    [0.009288422, 0.003354219, 0.0], // 703
    [0.008678854, 0.003134093, 0.0], // 704
    [0.008110916, 0.002929, 0.0], // 705
    [0.007582388, 0.002738139, 0.0], // 706
    [0.007088746, 0.002559876, 0.0], // 707
    [0.006627313, 0.002393244, 0.0], // 708
    [0.006195408, 0.002237275, 0.0], // 709
    [0.005790346, 0.002091, 0.0], // 710
    [0.005409826, 0.001953587, 0.0], // 711
    [0.005052583, 0.00182458, 0.0], // 712
    [0.004717512, 0.00170358, 0.0], // 713
    [0.004403507, 0.001590187, 0.0], // 714
    [0.004109457, 0.001484, 0.0], // 715
    [0.003833913, 0.001384496, 0.0], // 716
    [0.003575748, 0.001291268, 0.0], // 717
    [0.003334342, 0.001204092, 0.0], // 718
    [0.003109075, 0.001122744, 0.0], // 719
    [0.002899327, 0.001047, 0.0], // 720
    [0.002704348, 0.0009765896, 0.0], // 721
    [0.00252302, 0.0009111088, 0.0], // 722
    [0.002354168, 0.0008501332, 0.0], // 723
    [0.002196616, 0.0007932384, 0.0], // 724
    [0.00204919, 0.00074, 0.0], // 725
    [0.00191096, 0.0006900827, 0.0], // 726
    [0.001781438, 0.00064331, 0.0], // 727
    [0.00166011, 0.000599496, 0.0], // 728
    [0.001546459, 0.0005584547, 0.0], // 729
    [0.001439971, 0.00052, 0.0], // 730
    [0.001340042, 0.0004839136, 0.0], // 731
    [0.001246275, 0.0004500528, 0.0], // 732
    [0.001158471, 0.0004183452, 0.0], // 733
    [0.00107643, 0.0003887184, 0.0], // 734
    [0.0009999493, 0.0003611, 0.0], // 735
    [0.0009287358, 0.0003353835, 0.0], // 736
    [0.0008624332, 0.0003114404, 0.0], // 737
    [0.0008007503, 0.0002891656, 0.0], // 738
    [0.000743396, 0.0002684539, 0.0], // 739
    [0.0006900786, 0.0002492, 0.0], // 740
    [0.0006405156, 0.0002313019, 0.0], // 741
    [0.0005945021, 0.0002146856, 0.0], // 742
    [0.0005518646, 0.0001992884, 0.0], // 743
    [0.000512429, 0.0001850475, 0.0], // 744
    [0.0004760213, 0.0001719, 0.0], // 745
    [0.0004424536, 0.0001597781, 0.0], // 746
    [0.0004115117, 0.0001486044, 0.0], // 747
    [0.0003829814, 0.0001383016, 0.0], // 748
    [0.0003566491, 0.0001287925, 0.0], // 749
    [0.0003323011, 0.00012, 0.0], // 750
    [0.0003097586, 0.0001118595, 0.0], // 751
    [0.0002888871, 0.0001043224, 0.0], // 752
    [0.0002695394, 0.0000973356, 0.0], // 753
    [0.0002515682, 0.00009084587, 0.0], // 754
    [0.0002348261, 0.0000848, 0.0], // 755
    [0.000219171, 0.00007914667, 0.0], // 756
    [0.0002045258, 0.000073858, 0.0], // 757
    [0.0001908405, 0.000068916, 0.0], // 758
    [0.0001780654, 0.00006430267, 0.0], // 759
    [0.0001661505, 0.00006, 0.0], // 760
    [0.0001550236, 0.00005598187, 0.0], // 761
    [0.0001446219, 0.0000522256, 0.0], // 762
    [0.0001349098, 0.0000487184, 0.0], // 763
    [0.000125852, 0.00004544747, 0.0], // 764
    [0.000117413, 0.0000424, 0.0], // 765
    [0.0001095515, 0.00003956104, 0.0], // 766
    [0.0001022245, 0.00003691512, 0.0], // 767
    [0.00009539445, 0.00003444868, 0.0], // 768
    [0.0000890239, 0.00003214816, 0.0], // 769
    [0.00008307527, 0.00003, 0.0], // 770
    [0.00007751269, 0.00002799125, 0.0], // 771
    [0.00007231304, 0.00002611356, 0.0], // 772
    [0.00006745778, 0.00002436024, 0.0], // 773
    [0.00006292844, 0.00002272461, 0.0], // 774
    [0.00005870652, 0.0000212, 0.0], // 775
    [0.00005477028, 0.00001977855, 0.0], // 776
    [0.00005109918, 0.00001845285, 0.0], // 777
    [0.00004767654, 0.00001721687, 0.0], // 778
    [0.00004448567, 0.00001606459, 0.0], // 779
    [0.00004150994, 0.00001499, 0.0], // 780
    [0.00003873324, 0.00001398728, 0.0], // 781
    [0.00003614203, 0.00001305155, 0.0], // 782
    [0.00003372352, 0.00001217818, 0.0], // 783
    [0.00003146487, 0.00001136254, 0.0], // 784
    [0.00002935326, 0.0000106, 0.0], // 785
    [0.00002737573, 0.000009885877, 0.0], // 786
    [0.00002552433, 0.000009217304, 0.0], // 787
    [0.00002379376, 0.000008592362, 0.0], // 788
    [0.0000221787, 0.000008009133, 0.0], // 789
    [0.00002067383, 0.0000074657, 0.0], // 790
    [0.00001927226, 0.000006959567, 0.0], // 791
    [0.0000179664, 0.000006487995, 0.0], // 792
    [0.00001674991, 0.000006048699, 0.0], // 793
    [0.00001561648, 0.000005639396, 0.0], // 794
    [0.00001455977, 0.0000052578, 0.0], // 795
    [0.00001357387, 0.000004901771, 0.0], // 796
    [0.00001265436, 0.00000456972, 0.0], // 797
    [0.00001179723, 0.000004260194, 0.0], // 798
    [0.00001099844, 0.000003971739, 0.0], // 799
    [0.00001025398, 0.0000037029, 0.0], // 800
    [0.000009559646, 0.000003452163, 0.0], // 801
    [0.000008912044, 0.000003218302, 0.0], // 802
    [0.000008308358, 0.0000030003, 0.0], // 803
    [0.000007745769, 0.000002797139, 0.0], // 804
    [0.000007221456, 0.0000026078, 0.0], // 805
    [0.000006732475, 0.00000243122, 0.0], // 806
    [0.000006276423, 0.000002266531, 0.0], // 807
    [0.000005851304, 0.000002113013, 0.0], // 808
    [0.000005455118, 0.000001969943, 0.0], // 809
    [0.000005085868, 0.0000018366, 0.0], // 810
    [0.000004741466, 0.00000171223, 0.0], // 811
    [0.000004420236, 0.000001596228, 0.0], // 812
    [0.000004120783, 0.00000148809, 0.0], // 813
    [0.000003841716, 0.000001387314, 0.0], // 814
    [0.000003581652, 0.0000012934, 0.0], // 815
    [0.000003339127, 0.00000120582, 0.0], // 816
    [0.000003112949, 0.000001124143, 0.0], // 817
    [0.000002902121, 0.000001048009, 0.0], // 818
    [0.000002705645, 0.000000977058, 0.0], // 819
    [0.000002522525, 0.00000091093, 0.0], // 820
    [0.000002351726, 0.000000849251, 0.0], // 821
    [0.000002192415, 0.000000791721, 0.0], // 822
    [0.000002043902, 0.00000073809, 0.0], // 823
    [0.000001905497, 0.00000068811, 0.0], // 824
    [0.000001776509, 0.00000064153, 0.0], // 825
    [0.000001656215, 0.00000059809, 0.0], // 826
    [0.000001544022, 0.000000557575, 0.0], // 827
    [0.00000143944, 0.000000519808, 0.0], // 828
    [0.000001341977, 0.000000484612, 0.0], // 829
    [0.000001251141, 0.00000045181, 0.0], // 830
];
